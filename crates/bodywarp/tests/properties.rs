use approx::assert_relative_eq;
use bodywarp::image::{Image, ImageSize};
use bodywarp::imgproc::enhance::{color_grade, ColorGrade};
use bodywarp::imgproc::parallel::ExecutionStrategy;
use bodywarp::imgproc::warp::{displacement_at, falloff, sample_coordinate, warp_zones, WarpZone};
use bodywarp::zones::{builtin_specs, Onset};
use bodywarp::{
    definition_overlays, render_preview, warp_zones_for, Intensity, IntensitySource,
    PreviewConfig, PreviewError, View,
};

const SIZE: ImageSize = ImageSize {
    width: 400,
    height: 600,
};

fn photo(size: ImageSize) -> Result<Image<u8, 4>, PreviewError> {
    let mut data = Vec::with_capacity(size.width * size.height * 4);
    for y in 0..size.height {
        for x in 0..size.width {
            let v = ((x * 7 + y * 3) % 256) as u8;
            data.extend_from_slice(&[v, (y % 256) as u8, 255 - v, 200]);
        }
    }
    Ok(Image::new(size, data)?)
}

#[test]
fn identity_at_zero_intensity() -> Result<(), PreviewError> {
    let source = photo(ImageSize {
        width: 80,
        height: 120,
    })?;
    for view in View::ALL {
        let preview = render_preview(&source, view, Intensity::ZERO, &PreviewConfig::default())?;
        assert_eq!(preview.image, source, "{view} changed at p = 0");
        assert!(preview.overlays.is_empty());
    }
    Ok(())
}

#[test]
fn sample_coordinates_stay_in_bounds() {
    let size = ImageSize {
        width: 64,
        height: 96,
    };
    for view in View::ALL {
        // exaggerate the authored tables so many samples hit the border
        let zones: Vec<WarpZone> = warp_zones_for(view, size, Intensity::FULL)
            .into_iter()
            .map(|z| WarpZone {
                dx: z.dx * 50.0,
                dy: z.dy * 50.0,
                ..z
            })
            .collect();

        for y in 0..size.height {
            for x in 0..size.width {
                let (u, v) = sample_coordinate(&zones, x, y, size.width, size.height);
                assert!((0.0..=(size.width - 1) as f32).contains(&u));
                assert!((0.0..=(size.height - 1) as f32).contains(&v));
            }
        }
    }
}

#[test]
fn rendering_is_deterministic() -> Result<(), PreviewError> {
    let source = photo(ImageSize {
        width: 60,
        height: 90,
    })?;
    let p = Intensity::from_fraction(0.7);
    for view in View::ALL {
        assert_eq!(
            warp_zones_for(view, source.size(), p),
            warp_zones_for(view, source.size(), p)
        );
        let a = render_preview(&source, view, p, &PreviewConfig::default())?;
        let b = render_preview(&source, view, p, &PreviewConfig::default())?;
        assert_eq!(a, b);
    }
    Ok(())
}

#[test]
fn parallel_and_serial_passes_agree() -> Result<(), PreviewError> {
    let source = photo(ImageSize {
        width: 70,
        height: 110,
    })?;
    let serial = PreviewConfig {
        strategy: ExecutionStrategy::Serial,
        ..Default::default()
    };
    for view in View::ALL {
        let a = render_preview(&source, view, Intensity::FULL, &serial)?;
        let b = render_preview(&source, view, Intensity::FULL, &PreviewConfig::default())?;
        assert_eq!(a.image, b.image);
    }
    Ok(())
}

#[test]
fn falloff_is_monotonic_for_an_isolated_zone() {
    let zone = WarpZone::new(0.5, 0.5, 0.25, 0.25, 6.0, -3.0);
    let mut prev = f32::INFINITY;
    // walk from the center outward past the boundary at nx = 0.75
    for i in 0..=40 {
        let nx = 0.5 + i as f32 * 0.01;
        let (dx, dy) = displacement_at(&[zone], nx, 0.5);
        let magnitude = dx.hypot(dy);
        assert!(magnitude <= prev);
        prev = magnitude;
        if nx >= 0.75 {
            assert_eq!((dx, dy), (0.0, 0.0));
        }
    }
    assert_eq!(falloff(1.0), 0.0);
}

#[test]
fn profile_fields_mirror() {
    let p = Intensity::from_fraction(0.9);
    let side = warp_zones_for(View::Side, SIZE, p);
    let alt = warp_zones_for(View::SideAlt, SIZE, p);

    for y in (0..SIZE.height).step_by(5) {
        for x in (1..SIZE.width).step_by(3) {
            let ny = y as f32 / SIZE.height as f32;
            let (side_dx, side_dy) = displacement_at(&side, x as f32 / SIZE.width as f32, ny);
            let mirrored = (SIZE.width - x) as f32 / SIZE.width as f32;
            let (alt_dx, alt_dy) = displacement_at(&alt, mirrored, ny);
            assert_relative_eq!(alt_dx, -side_dx, epsilon = 1e-3);
            assert_relative_eq!(alt_dy, side_dy, epsilon = 1e-3);
        }
    }
}

#[test]
fn grade_at_zero_is_identity() -> Result<(), PreviewError> {
    let source = photo(ImageSize {
        width: 16,
        height: 16,
    })?;
    let mut graded = Image::from_size_val(source.size(), 0u8)?;
    color_grade(&source, &mut graded, &ColorGrade::from_intensity(0.0))?;
    assert_eq!(graded, source);
    Ok(())
}

#[test]
fn warp_leaves_far_pixels_untouched() -> Result<(), PreviewError> {
    let source = photo(ImageSize {
        width: 100,
        height: 150,
    })?;
    let zones = warp_zones_for(View::Front, source.size(), Intensity::FULL);
    let mut warped = Image::from_size_val(source.size(), 0u8)?;
    warp_zones(&source, &mut warped, &zones, ExecutionStrategy::ParallelRows)?;
    // the top corners are outside every front zone
    assert_eq!(warped.pixel(0, 0)?, source.pixel(0, 0)?);
    assert_eq!(warped.pixel(99, 0)?, source.pixel(99, 0)?);
    assert_ne!(warped, source);
    Ok(())
}

#[test]
fn scenario_front_waist_at_half_intensity() {
    let zones = warp_zones_for(View::Front, SIZE, Intensity::from_fraction(0.5));
    let waist: Vec<f32> = zones.iter().take(2).map(|z| z.dx).collect();
    assert_relative_eq!(waist[0].abs(), 7.0, epsilon = 1e-4);
    assert_relative_eq!(waist[1].abs(), 7.0, epsilon = 1e-4);
    assert_relative_eq!(waist[0], -waist[1]);
    assert_relative_eq!(zones[0].cx, 1.0 - zones[1].cx, epsilon = 1e-6);
}

#[test]
fn scenario_delayed_zones_idle_below_onset() {
    let p = Intensity::from_fraction(0.1);
    for view in View::ALL {
        let zones = warp_zones_for(view, SIZE, p);
        let mut primary_active = false;
        for (spec, zone) in builtin_specs(view).iter().zip(&zones) {
            match spec.onset {
                Onset::Delayed => assert_eq!((zone.dx, zone.dy), (0.0, 0.0)),
                Onset::Primary => primary_active |= zone.dx != 0.0 || zone.dy != 0.0,
            }
        }
        assert!(primary_active, "{view} has no active primary zone");
    }
}

#[test]
fn scenario_profiles_have_no_overlays() {
    for p in [0.0, 0.25, 0.5, 1.0] {
        let p = Intensity::from_fraction(p);
        assert!(definition_overlays(View::Side, p).is_empty());
        assert!(definition_overlays(View::SideAlt, p).is_empty());
    }
}

#[test]
fn scenario_long_duration_saturates() {
    let p = IntensitySource::DurationMonths(18.0).resolve();
    assert!(!p.value().is_nan());
    assert_eq!(p.value(), 1.0);
}
