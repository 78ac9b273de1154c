// SPDX-License-Identifier: MPL-2.0
//! Users page: operators, cameras and live previews.

use super::grid;
use crate::domain::{CameraRecord, CameraStatus, PresenceStatus, RelativeTime, UserRecord};
use crate::i18n::{I18n, MessageKey};
use crate::routing::Direction;
use crate::ui::components::actions::{self, Action, ActionLabels, CreateTarget};
use crate::ui::components::camera_card::{CameraCard, CameraCardModel, DetailItem};
use crate::ui::components::camera_preview::{self, CameraPreviewModel};
use crate::ui::components::status_chip;
use crate::ui::components::user_card::{UserCard, UserCardModel};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::direction;
use crate::ui::styles::{container as container_styles, Skin};
use iced::alignment::Vertical;
use iced::widget::{container, scrollable, text, Column, Row, Space};
use iced::{Element, Length};
use std::collections::BTreeMap;

const CARD_COLUMNS: usize = 2;
const PREVIEW_COLUMNS: usize = 4;

/// Number of cameras per status. Every status is present, even at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts(BTreeMap<CameraStatus, usize>);

impl StatusCounts {
    #[must_use]
    pub fn get(&self, status: CameraStatus) -> usize {
        self.0.get(&status).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Counts in summary order.
    pub fn iter(&self) -> impl Iterator<Item = (CameraStatus, usize)> + '_ {
        self.0.iter().map(|(status, count)| (*status, *count))
    }
}

/// Folds `cameras` into per-status counts.
#[must_use]
pub fn camera_status_counts(cameras: &[CameraRecord]) -> StatusCounts {
    let zeroed: BTreeMap<_, usize> = CameraStatus::ALL.into_iter().map(|status| (status, 0)).collect();
    StatusCounts(cameras.iter().fold(zeroed, |mut counts, camera| {
        *counts.entry(camera.status).or_insert(0) += 1;
        counts
    }))
}

/// First letter of up to the first two words of `name`, uppercased.
#[must_use]
pub fn avatar_label(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// "3 minutes ago" in the active locale, with plural selection on the count.
#[must_use]
pub fn format_relative(i18n: &I18n, time: RelativeTime) -> String {
    i18n.tr_count(MessageKey::relative(time.unit), time.count)
}

/// One entry of the camera summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary {
    pub status: CameraStatus,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersPageModel {
    pub direction: Direction,
    pub title: String,
    pub subtitle: String,
    pub create_user: String,
    pub legend: Vec<(PresenceStatus, String)>,
    pub users: Vec<UserCardModel>,
    pub user_labels: ActionLabels,
    pub cameras_title: String,
    pub cameras_subtitle: String,
    pub create_camera: String,
    pub summary: Vec<StatusSummary>,
    pub cameras: Vec<CameraCardModel>,
    pub camera_labels: ActionLabels,
    pub preview_title: String,
    pub preview_subtitle: String,
    pub previews: Vec<CameraPreviewModel>,
}

/// Builds the users page in the active locale of `i18n`.
///
/// Record fields and catalog strings are localized with the same locale.
#[must_use]
pub fn compose_users_page(
    i18n: &I18n,
    users: &[UserRecord],
    cameras: &[CameraRecord],
) -> UsersPageModel {
    let locale = i18n.current_locale();
    let users = users
        .iter()
        .map(|user| {
            let name = user.name.select(locale).to_string();
            UserCardModel {
                id: user.id.clone(),
                avatar: avatar_label(&name),
                name,
                username: user.username.clone(),
                role: i18n.tr(MessageKey::role(user.role)),
                status: user.status,
                status_label: i18n.tr(MessageKey::presence(user.status)),
                last_active: format_relative(i18n, user.last_active),
            }
        })
        .collect();

    let camera_cards = cameras
        .iter()
        .map(|camera| CameraCardModel {
            id: camera.id.clone(),
            name: camera.name.select(locale).to_string(),
            status: camera.status,
            status_label: i18n.tr(MessageKey::camera_status(camera.status)),
            details: vec![
                DetailItem::new(i18n.tr(MessageKey::CameraFieldNumber), &camera.number),
                DetailItem::new(
                    i18n.tr(MessageKey::CameraFieldLocation),
                    camera.location.select(locale),
                ),
                DetailItem::new(
                    i18n.tr(MessageKey::CameraFieldResolution),
                    &camera.resolution,
                ),
                DetailItem::new(
                    i18n.tr(MessageKey::CameraFieldLastActive),
                    format_relative(i18n, camera.last_active),
                ),
            ],
        })
        .collect();

    let previews = cameras
        .iter()
        .map(|camera| CameraPreviewModel {
            id: camera.id.clone(),
            name: camera.name.select(locale).to_string(),
            number: camera.number.clone(),
            stream_url: camera.stream_url.clone(),
            status: camera.status,
            status_label: i18n.tr(MessageKey::camera_status(camera.status)),
        })
        .collect();

    let summary = camera_status_counts(cameras)
        .iter()
        .map(|(status, count)| StatusSummary {
            status,
            label: i18n.tr(MessageKey::camera_status(status)),
            count,
        })
        .collect();

    UsersPageModel {
        direction: locale.direction(),
        title: i18n.tr(MessageKey::UsersTitle),
        subtitle: i18n.tr(MessageKey::UsersSubtitle),
        create_user: i18n.tr(MessageKey::UserCreate),
        legend: PresenceStatus::LEGEND
            .into_iter()
            .map(|status| (status, i18n.tr(MessageKey::presence(status))))
            .collect(),
        users,
        user_labels: ActionLabels {
            edit: i18n.tr(MessageKey::UserEdit),
            remove: i18n.tr(MessageKey::UserRemove),
            view: None,
        },
        cameras_title: i18n.tr(MessageKey::CamerasTitle),
        cameras_subtitle: i18n.tr(MessageKey::CamerasSubtitle),
        create_camera: i18n.tr(MessageKey::CameraCreate),
        summary,
        cameras: camera_cards,
        camera_labels: ActionLabels {
            edit: i18n.tr(MessageKey::CameraEdit),
            remove: i18n.tr(MessageKey::CameraRemove),
            view: Some(i18n.tr(MessageKey::CameraView)),
        },
        preview_title: i18n.tr(MessageKey::PreviewTitle),
        preview_subtitle: i18n.tr(MessageKey::PreviewSubtitle),
        previews,
    }
}

// ============================================================================
// View
// ============================================================================

pub fn view(model: &UsersPageModel, skin: Skin) -> Element<'_, Action> {
    let direction = model.direction;

    let legend: Row<'_, Action> = direction::row(
        direction,
        model.legend.iter().map(|(status, label)| {
            status_chip::indicator(
                label.as_str(),
                skin.presence(*status),
                skin.font,
                direction,
            )
        }),
    )
    .spacing(spacing::MD);

    let user_cards = model
        .users
        .iter()
        .map(|user| {
            UserCard::new(user, skin, direction)
                .actions(actions::user_actions(
                    &user.id,
                    &model.user_labels,
                    skin,
                    direction,
                ))
                .view()
        })
        .collect();

    let users_section = section(
        header(
            &model.title,
            &model.subtitle,
            actions::create_button(
                &model.create_user,
                skin.success,
                skin.font,
                CreateTarget::User,
            ),
            skin,
            direction,
        ),
        Column::new()
            .push(legend)
            .push(grid(direction, user_cards, CARD_COLUMNS))
            .spacing(spacing::MD),
        skin,
        direction,
    );

    let summary: Row<'_, Action> = direction::row(
        direction,
        model.summary.iter().map(|entry| {
            status_chip::chip(
                format!("{} · {}", entry.label, entry.count),
                skin.camera_status(entry.status),
                skin.font,
                direction,
            )
        }),
    )
    .spacing(spacing::SM);

    let camera_cards = model
        .cameras
        .iter()
        .map(|camera| {
            CameraCard::new(camera, skin, direction)
                .actions(actions::camera_actions(
                    &camera.id,
                    &model.camera_labels,
                    skin,
                    direction,
                ))
                .view()
        })
        .collect();

    let cameras_section = section(
        header(
            &model.cameras_title,
            &model.cameras_subtitle,
            actions::create_button(
                &model.create_camera,
                skin.info,
                skin.font,
                CreateTarget::Camera,
            ),
            skin,
            direction,
        ),
        Column::new()
            .push(summary)
            .push(grid(direction, camera_cards, CARD_COLUMNS))
            .spacing(spacing::MD),
        skin,
        direction,
    );

    let previews = model
        .previews
        .iter()
        .map(|preview| camera_preview::view(preview, skin, direction))
        .collect();

    let preview_section = section(
        header(
            &model.preview_title,
            &model.preview_subtitle,
            Space::new().into(),
            skin,
            direction,
        ),
        grid(direction, previews, PREVIEW_COLUMNS),
        skin,
        direction,
    );

    scrollable(
        Column::new()
            .push(users_section)
            .push(cameras_section)
            .push(preview_section)
            .spacing(spacing::LG)
            .padding(spacing::LG),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn header<'a>(
    title: &'a str,
    subtitle: &'a str,
    trailing: Element<'a, Action>,
    skin: Skin,
    direction: Direction,
) -> Element<'a, Action> {
    let titles = Column::new()
        .push(text(title).size(typography::TITLE_MD).font(skin.font))
        .push(
            text(subtitle)
                .font(skin.font)
                .size(typography::BODY)
                .color(skin.text_secondary),
        )
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .align_x(direction::start(direction));

    direction::row(direction, [titles.into(), trailing])
        .align_y(Vertical::Center)
        .into()
}

fn section<'a>(
    header: Element<'a, Action>,
    body: impl Into<Element<'a, Action>>,
    skin: Skin,
    direction: Direction,
) -> Element<'a, Action> {
    container(
        Column::new()
            .push(header)
            .push(body)
            .spacing(spacing::MD)
            .align_x(direction::start(direction)),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(container_styles::section(skin))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{samples, LocalizedText, TimeUnit};
    use crate::routing::Locale;

    fn camera_with(status: CameraStatus) -> CameraRecord {
        let mut camera = samples::sample_cameras().remove(0);
        camera.status = status;
        camera
    }

    #[test]
    fn avatar_label_takes_two_initials() {
        assert_eq!(avatar_label("Ali Rezaei"), "AR");
        assert_eq!(avatar_label("Madonna"), "M");
        assert_eq!(avatar_label("  mahsa   gholami  extra "), "MG");
        assert_eq!(avatar_label(""), "");
    }

    #[test]
    fn avatar_label_is_stable() {
        let once = avatar_label("Sara Mohseni");
        assert_eq!(avatar_label(&once), "S");
        assert_eq!(avatar_label("Sara Mohseni"), once);
    }

    #[test]
    fn avatar_label_handles_farsi_names() {
        assert_eq!(avatar_label("علی رضایی"), "عر");
    }

    #[test]
    fn all_active_counts_keep_zero_statuses() {
        let cameras = vec![camera_with(CameraStatus::Active); 4];
        let counts = camera_status_counts(&cameras);
        assert_eq!(counts.get(CameraStatus::Active), 4);
        assert_eq!(counts.get(CameraStatus::Inactive), 0);
        assert_eq!(counts.get(CameraStatus::Maintenance), 0);
        assert_eq!(counts.iter().count(), CameraStatus::ALL.len());
    }

    #[test]
    fn counts_sum_to_total() {
        let cameras = samples::sample_cameras();
        let counts = camera_status_counts(&cameras);
        assert_eq!(counts.total(), cameras.len());
        assert_eq!(counts.get(CameraStatus::Active), 2);

        let empty = camera_status_counts(&[]);
        assert_eq!(empty.total(), 0);
        assert_eq!(empty.iter().count(), 3);
    }

    #[test]
    fn relative_time_pluralizes_in_english() {
        let i18n = I18n::new(Locale::En).expect("catalogs");
        assert_eq!(
            format_relative(&i18n, RelativeTime::minutes(1)),
            "1 minute ago"
        );
        assert_eq!(
            format_relative(&i18n, RelativeTime::minutes(18)),
            "18 minutes ago"
        );
        assert_eq!(format_relative(&i18n, RelativeTime::hours(1)), "1 hour ago");
    }

    #[test]
    fn relative_time_pluralizes_in_farsi() {
        let i18n = I18n::new(Locale::Fa).expect("catalogs");
        let one = format_relative(&i18n, RelativeTime::minutes(1));
        let many = format_relative(&i18n, RelativeTime::minutes(18));
        assert_eq!(one, "یک دقیقه پیش");
        assert!(many.contains("18"));
        assert_ne!(one, many);
    }

    #[test]
    fn compose_localizes_record_fields() {
        let mut i18n = I18n::new(Locale::Fa).expect("catalogs");
        let users = samples::sample_users();
        let cameras = samples::sample_cameras();

        let farsi = compose_users_page(&i18n, &users, &cameras);
        assert_eq!(farsi.direction, Direction::Rtl);
        assert_eq!(farsi.users[0].name, "علی رضایی");
        assert_eq!(farsi.cameras[2].name, "دوربین انبار مرکزی");

        i18n.set_locale(Locale::En);
        let english = compose_users_page(&i18n, &users, &cameras);
        assert_eq!(english.users[0].avatar, "AR");
        assert_eq!(english.users[1].last_active, "18 minutes ago");
        assert_eq!(english.cameras[0].details[0].value, "CAM-001");
        assert_eq!(english.cameras[0].details[1].value, "North Main Entrance");
        assert_eq!(english.previews.len(), cameras.len());
    }

    #[test]
    fn record_fields_follow_the_active_catalog() {
        let mut i18n = I18n::new(Locale::En).expect("catalogs");
        let users = samples::sample_users();

        let english = compose_users_page(&i18n, &users, &[]);
        assert_eq!(english.users[0].name, "Ali Rezaei");
        assert_eq!(english.users[0].role, i18n.tr(MessageKey::role(users[0].role)));

        i18n.set_locale(Locale::Fa);
        let farsi = compose_users_page(&i18n, &users, &[]);
        assert_eq!(farsi.users[0].name, "علی رضایی");
        assert_eq!(farsi.users[0].role, i18n.tr(MessageKey::role(users[0].role)));
        assert_eq!(farsi.direction, Direction::Rtl);
    }

    #[test]
    fn compose_falls_back_to_english_names() {
        let i18n = I18n::new(Locale::Fa).expect("catalogs");
        let mut cameras = samples::sample_cameras();
        cameras[0].name = LocalizedText::english_only("Gate Camera");
        let model = compose_users_page(&i18n, &[], &cameras);
        assert_eq!(model.cameras[0].name, "Gate Camera");
        assert_eq!(model.previews[0].name, "Gate Camera");
    }

    #[test]
    fn summary_lists_every_status_in_order() {
        let i18n = I18n::new(Locale::En).expect("catalogs");
        let cameras = vec![camera_with(CameraStatus::Maintenance)];
        let model = compose_users_page(&i18n, &[], &cameras);
        let summary: Vec<_> = model
            .summary
            .iter()
            .map(|entry| (entry.status, entry.count))
            .collect();
        assert_eq!(
            summary,
            vec![
                (CameraStatus::Active, 0),
                (CameraStatus::Inactive, 0),
                (CameraStatus::Maintenance, 1),
            ]
        );
        assert_eq!(model.summary[2].label, "Maintenance");
    }

    #[test]
    fn last_active_uses_record_unit() {
        let i18n = I18n::new(Locale::En).expect("catalogs");
        let users = samples::sample_users();
        let model = compose_users_page(&i18n, &users, &[]);
        let hours = users
            .iter()
            .position(|user| user.last_active.unit == TimeUnit::Hours)
            .expect("sample with hours");
        assert_eq!(model.users[hours].last_active, "4 hours ago");
    }

    #[test]
    fn view_builds_for_both_directions() {
        let mut i18n = I18n::new(Locale::Fa).expect("catalogs");
        let users = samples::sample_users();
        let cameras = samples::sample_cameras();
        let farsi = compose_users_page(&i18n, &users, &cameras);
        let _ = view(&farsi, Skin::default());

        i18n.set_locale(Locale::En);
        let english = compose_users_page(&i18n, &users, &cameras);
        let _ = view(&english, Skin::default());
    }
}
