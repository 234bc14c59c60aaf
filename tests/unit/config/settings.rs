use super::*;

#[test]
fn defaults_are_sane() {
    let s = ImageSettings::default();
    assert_eq!(s.blur, 4);
    assert_eq!(s.font_size_title, 33);
    assert_eq!(s.font_size_caption, 33);
    assert_eq!(s.crop_step, 50);
    assert!(s.allowed_chats.is_empty());
}

#[test]
fn empty_allow_list_permits_every_chat() {
    let s = ImageSettings::default();
    assert!(s.is_chat_allowed(ChatId(1)));
    assert!(s.is_chat_allowed(ChatId(-42)));

    let restricted = ImageSettings {
        allowed_chats: vec![ChatId(10)],
        ..ImageSettings::default()
    };
    assert!(restricted.is_chat_allowed(ChatId(10)));
    assert!(!restricted.is_chat_allowed(ChatId(11)));
}

#[test]
fn increment_is_unbounded_above() {
    let shared = SharedSettings::new(ImageSettings {
        blur: 0,
        ..ImageSettings::default()
    });
    for expected in 1..=5 {
        assert_eq!(shared.increment(SettingField::Blur), expected);
    }
    assert_eq!(shared.get(SettingField::Blur), 5);
}

#[test]
fn decrement_at_zero_is_a_no_op() {
    let shared = SharedSettings::new(ImageSettings {
        blur: 1,
        ..ImageSettings::default()
    });
    assert_eq!(shared.decrement(SettingField::Blur), Some(0));
    assert_eq!(shared.decrement(SettingField::Blur), None);
    assert_eq!(shared.get(SettingField::Blur), 0);
}

#[test]
fn clones_observe_the_same_values() {
    let a = SharedSettings::new(ImageSettings::default());
    let b = a.clone();
    a.increment(SettingField::FontSizeTitle);
    assert_eq!(b.get(SettingField::FontSizeTitle), 34);
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let first = SharedSettings::load(&path).unwrap();
    assert_eq!(first.get(SettingField::Blur), 4); // missing file falls back to defaults

    first.increment(SettingField::Blur);
    first.update(|s| s.allowed_chats.push(ChatId(7)));
    first.save().unwrap();

    let second = SharedSettings::load(&path).unwrap();
    assert_eq!(second.get(SettingField::Blur), 5);
    assert_eq!(second.snapshot().allowed_chats, vec![ChatId(7)]);
}

#[test]
fn save_without_store_is_a_no_op() {
    let shared = SharedSettings::new(ImageSettings::default());
    shared.save().unwrap();
}
