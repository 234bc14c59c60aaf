use super::*;

use crate::{interface::reply::Keyboard, session::tuner::PadDirection};

fn all_actions() -> Vec<ButtonAction> {
    let mut actions = vec![
        ButtonAction::Template("DMI".to_string()),
        ButtonAction::Template("informatica_vuoto".to_string()),
        ButtonAction::Crop(CropCommand::Reset),
        ButtonAction::Crop(CropCommand::Finish),
        ButtonAction::Random(RandomCommand::Again),
        ButtonAction::Random(RandomCommand::Finish),
        ButtonAction::Noop,
    ];
    for mode in [ResizeMode::Crop, ResizeMode::Scale, ResizeMode::Random] {
        actions.push(ButtonAction::ResizeMode(mode));
    }
    for dir in PadDirection::ALL {
        actions.push(ButtonAction::Crop(CropCommand::Nudge(dir)));
    }
    for field in [
        SettingField::Blur,
        SettingField::FontSizeTitle,
        SettingField::FontSizeCaption,
    ] {
        actions.push(ButtonAction::OpenSetting(field));
        for op in [
            SettingOp::Increase,
            SettingOp::Decrease,
            SettingOp::Save,
            SettingOp::Cancel,
        ] {
            actions.push(ButtonAction::AlterSetting { field, op });
        }
    }
    actions
}

#[test]
fn every_wire_id_round_trips() {
    for action in all_actions() {
        let wire = action.wire_id();
        assert_eq!(ButtonAction::parse(&wire), Some(action), "{wire}");
    }
}

#[test]
fn wire_ids_are_verbatim() {
    // these strings are a frozen transport contract
    assert_eq!(
        ButtonAction::Template("DMI".into()).wire_id(),
        "template_DMI"
    );
    assert_eq!(
        ButtonAction::ResizeMode(ResizeMode::Crop).wire_id(),
        "image_resize_mode_crop"
    );
    assert_eq!(
        ButtonAction::Crop(CropCommand::Nudge(PadDirection::UpLeft)).wire_id(),
        "image_crop_up-left"
    );
    assert_eq!(ButtonAction::Crop(CropCommand::Reset).wire_id(), "image_crop_reset");
    assert_eq!(
        ButtonAction::Random(RandomCommand::Again).wire_id(),
        "image_random_again"
    );
    assert_eq!(
        ButtonAction::OpenSetting(SettingField::FontSizeTitle).wire_id(),
        "settings_font_size_title"
    );
    assert_eq!(
        ButtonAction::AlterSetting {
            field: SettingField::Blur,
            op: SettingOp::Increase
        }
        .wire_id(),
        "alter_setting_blur,+"
    );
    assert_eq!(ButtonAction::Noop.wire_id(), "_");
}

#[test]
fn malformed_ids_are_rejected() {
    for wire in [
        "",
        "template_",
        "image_resize_mode_stretch",
        "image_crop_diagonal",
        "image_random_maybe",
        "settings_volume",
        "alter_setting_blur",
        "alter_setting_blur,*",
        "alter_setting_volume,+",
        "unrelated",
    ] {
        assert_eq!(ButtonAction::parse(wire), None, "{wire:?}");
    }
}

#[test]
fn keyboards_enumerate_their_actions() {
    let crop = Keyboard::CropPad.actions();
    assert_eq!(crop.len(), 10);
    assert!(crop.contains(&"image_crop_up".to_string()));
    assert!(crop.contains(&"image_crop_finish".to_string()));

    assert_eq!(
        Keyboard::RandomPad.actions(),
        vec!["image_random_again", "image_random_finish"]
    );
    assert_eq!(
        Keyboard::SettingsMenu.actions(),
        vec![
            "settings_blur",
            "settings_font_size_title",
            "settings_font_size_caption"
        ]
    );
    assert_eq!(
        Keyboard::SettingAdjust {
            field: SettingField::Blur,
            value: 3
        }
        .actions(),
        vec![
            "alter_setting_blur,-",
            "alter_setting_blur,+",
            "alter_setting_blur,cancel",
            "alter_setting_blur,save"
        ]
    );
    // every advertised action parses back into the contract
    for keyboard in [Keyboard::CropPad, Keyboard::ResizeModes, Keyboard::RandomPad] {
        for wire in keyboard.actions() {
            assert!(ButtonAction::parse(&wire).is_some(), "{wire}");
        }
    }
}
