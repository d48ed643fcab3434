use seedpix::*;

#[test]
fn test_get_avatar_deterministic() {
    let opts = AvatarOptions::default();
    let first = get_avatar("alice", &opts).unwrap();
    let second = get_avatar("alice", &opts).unwrap();
    assert_eq!(first.image.bytes(), second.image.bytes());
    assert_eq!(first.color, second.color);
}

#[test]
fn test_get_avatar_color_golden() {
    let avatar = get_avatar("alice", &AvatarOptions::default()).unwrap();
    // Base accent color, not a palette entry.
    assert_eq!(avatar.color, Hsl::new(18, 66, 34));
}

#[test]
fn test_get_avatar_default_dimensions() {
    let avatar = get_avatar("alice", &AvatarOptions::default()).unwrap();
    let decoded = image::load_from_memory(avatar.image.bytes()).unwrap();
    // size 10 cells at 10 pixels per cell.
    assert_eq!(decoded.width(), 100);
    assert_eq!(decoded.height(), 100);
}

#[test]
fn test_avatar_overrides_win() {
    let avatar = get_avatar(
        "alice",
        &AvatarOptions {
            size: Some(6),
            scale: Some(3),
            color_bias: Some(0),
            ..AvatarOptions::default()
        },
    )
    .unwrap();
    let decoded = image::load_from_memory(avatar.image.bytes()).unwrap();
    assert_eq!(decoded.width(), 18);
    assert_eq!(decoded.height(), 18);
}

#[test]
fn test_scheme_source_is_consulted() {
    struct DarkHost;
    impl SchemeSource for DarkHost {
        fn prefers_dark(&self) -> Option<bool> {
            Some(true)
        }
    }
    struct BrokenHost;
    impl SchemeSource for BrokenHost {
        fn prefers_dark(&self) -> Option<bool> {
            None
        }
    }

    let opts = AvatarOptions::default();
    let dark = get_avatar_with("alice", &opts, &DarkHost).unwrap();
    assert_eq!(dark.color, Hsl::new(18, 66, 84));

    // Unknown preference degrades to light.
    let fallback = get_avatar_with("alice", &opts, &BrokenHost).unwrap();
    assert_eq!(fallback.color, Hsl::new(18, 66, 34));
    assert_eq!(
        fallback.image.bytes(),
        get_avatar("alice", &opts).unwrap().image.bytes()
    );

    // An explicit scheme wins over the host.
    let explicit = get_avatar_with(
        "alice",
        &AvatarOptions {
            scheme: Some(Scheme::Light),
            ..AvatarOptions::default()
        },
        &DarkHost,
    )
    .unwrap();
    assert_eq!(explicit.color, Hsl::new(18, 66, 34));
}

#[test]
fn test_seed_override_changes_image_not_color() {
    let plain = get_avatar("alice", &AvatarOptions::default()).unwrap();
    let overridden = get_avatar(
        "alice",
        &AvatarOptions {
            seed: Some("something else".into()),
            ..AvatarOptions::default()
        },
    )
    .unwrap();
    assert_ne!(plain.image.bytes(), overridden.image.bytes());
    assert_eq!(plain.color, overridden.color);
}

#[test]
fn test_randpix_deterministic() {
    let opts = Options::new("some seed");
    assert_eq!(
        randpix(&opts).unwrap().bytes(),
        randpix(&opts).unwrap().bytes()
    );
}

#[test]
fn test_randpix_seeds_differ() {
    let a = randpix(&Options::new("alice")).unwrap();
    let b = randpix(&Options::new("bob")).unwrap();
    assert_ne!(a.bytes(), b.bytes());
}

#[test]
fn test_forced_color_full_fill() {
    let forced = Rgb::new(10, 20, 30);
    let image = randpix(&Options {
        seed: "anything".into(),
        size: 8,
        scale: 1,
        color: Some(forced),
        fill_factor: 1.0,
        symmetry: Symmetry::Quad,
        ..Options::default()
    })
    .unwrap();
    let decoded = image::load_from_memory(image.bytes())
        .unwrap()
        .into_rgba8();
    assert_eq!(decoded.dimensions(), (8, 8));
    for pixel in decoded.pixels() {
        assert_eq!(*pixel, image::Rgba([10, 20, 30, 255]));
    }
}

#[test]
fn test_zero_fill_is_fully_transparent() {
    let image = randpix(&Options {
        seed: "anything".into(),
        fill_factor: 0.0,
        scale: 4,
        ..Options::default()
    })
    .unwrap();
    let decoded = image::load_from_memory(image.bytes())
        .unwrap()
        .into_rgba8();
    for pixel in decoded.pixels() {
        assert_eq!(pixel.0[3], 0);
    }
}

#[test]
fn test_empty_seed_is_valid() {
    let image = randpix(&Options::default()).unwrap();
    assert!(!image.bytes().is_empty());
    let avatar = get_avatar("", &AvatarOptions::default()).unwrap();
    assert_eq!(avatar.color, Hsl::new(219, 54, 36));
}

#[cfg(feature = "data-url")]
#[test]
fn test_data_url_deterministic() {
    let opts = AvatarOptions::default();
    let a = get_avatar("alice", &opts).unwrap().image.to_data_url();
    let b = get_avatar("alice", &opts).unwrap().image.to_data_url();
    assert!(a.starts_with("data:image/png;base64,"));
    assert_eq!(a, b);
}
