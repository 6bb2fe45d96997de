// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for non-blocking user feedback.
//!
//! Failures of external actions (clipboard, file dialogs, page loading) are
//! surfaced here instead of interrupting the rest of the page. Success and
//! info toasts dismiss themselves; errors stay until dismissed.

use crate::i18n::fluent::I18n;
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Text};
use iced::{alignment, Color, Element, Length};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (3s duration).
    #[default]
    Success,
    /// Informational message (3s duration).
    Info,
    /// Warning that doesn't block operation (5s duration).
    Warning,
    /// Error requiring attention (manual dismiss).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => styles::palette::SUCCESS,
            Severity::Info => styles::palette::INFO,
            Severity::Warning => styles::palette::WARNING,
            Severity::Error => styles::palette::ERROR,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and i18n key.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Creates a warning notification.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the i18n message key.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Resolves the localized message for display.
    #[must_use]
    pub fn message(&self, i18n: &I18n) -> String {
        if self.message_args.is_empty() {
            i18n.tr(&self.message_key)
        } else {
            let args: Vec<(&str, &str)> = self
                .message_args
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(&self.message_key, &args)
        }
    }

    /// Returns whether this notification has outlived its display duration.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        match self.severity.auto_dismiss_duration() {
            Some(duration) => self.created_at.elapsed() >= duration,
            None => false,
        }
    }
}

/// Messages emitted by the notification area.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Holds active notifications and drives their expiry.
#[derive(Debug, Default)]
pub struct Manager {
    notifications: Vec<Notification>,
}

impl Manager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification to the display queue.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Removes the notification with the given ID, if present.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.notifications.retain(|n| n.id() != id);
    }

    /// Drops all auto-dismissing notifications that have expired.
    /// Called from the application's tick.
    pub fn dismiss_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Whether any notification is currently shown (gates the tick
    /// subscription).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    /// Iterates over active notifications, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.notifications.iter()
    }
}

/// Renders the toast column, anchored to the bottom-right of the window.
pub fn view<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(8).align_x(alignment::Horizontal::Right);

    for notification in manager.iter() {
        let dismiss = button(Text::new("×").size(16))
            .style(styles::overlay_control)
            .padding([0, 6])
            .on_press(Message::Dismiss(notification.id()));

        let body = Row::new()
            .spacing(10)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(notification.message(i18n)).size(14))
            .push(dismiss);

        column = column.push(
            container(body)
                .padding([8, 12])
                .style(styles::toast(notification.severity().color())),
        );
    }

    container(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
}
