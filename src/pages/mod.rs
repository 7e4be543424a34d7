//! Page controllers.
//!
//! A controller owns the view state of one screen for the duration of a
//! request: the fetched collections, the banners, which modal is open and the
//! form being edited. Every action that renders a page loads its collections
//! exactly once, after any mutation, and never renders data from a load that
//! failed part-way.

pub mod dashboard;
pub mod greenhouse_detail;
pub mod greenhouses;
pub mod login;
pub mod plants;
pub mod sensors;
pub mod users;

use serde::Deserialize;

use crate::api::models::{Greenhouse, Pagination, User};
use crate::services::Services;
use crate::session::SessionUser;

pub const MISSING_FIELDS: &str = "Completa todos los campos";

/// What every controller needs: the services, the signed-in operator and the
/// list page size.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub services: &'a Services,
    pub user: &'a SessionUser,
    pub page_size: u32,
}

impl<'a> PageContext<'a> {
    #[must_use]
    pub fn new(services: &'a Services, user: &'a SessionUser, page_size: u32) -> Self {
        Self {
            services,
            user,
            page_size,
        }
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::first(self.page_size)
    }
}

/// Dismissible banners shown above a page's content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    pub error: Option<String>,
    pub success: Option<String>,
}

impl Flash {
    pub fn error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Create,
    Edit(i64),
}

impl Modal {
    #[must_use]
    pub fn is_open(self) -> bool {
        self != Self::Closed
    }
}

/// Query string of a list page: which modal or confirmation to open.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    pub modal: Option<String>,
    pub edit: Option<i64>,
    pub confirm_delete: Option<i64>,
}

/// View state shared by every list page, generic over its form.
#[derive(Debug, Clone, Default)]
pub struct ListView<F> {
    pub flash: Flash,
    pub modal: Modal,
    pub form: F,
    pub confirm_delete: Option<i64>,
}

impl<F: Default> ListView<F> {
    /// Modal still open with what the operator typed.
    #[must_use]
    pub fn reopened(modal: Modal, form: F, error: impl Into<String>) -> Self {
        let mut view = Self {
            modal,
            form,
            ..Self::default()
        };
        view.flash.error(error);
        view
    }

    /// Modal closed after a successful mutation.
    #[must_use]
    pub fn succeeded(message: impl Into<String>) -> Self {
        let mut view = Self::default();
        view.flash.success(message);
        view
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        let mut view = Self::default();
        view.flash.error(message);
        view
    }

    /// Open the create modal, the edit modal or the delete confirmation.
    ///
    /// `prefill` builds the edit form from the loaded record; `None` means the
    /// record is not in the current collection and the modal stays closed.
    pub fn apply(&mut self, query: &ViewQuery, blank: F, prefill: impl FnOnce(i64) -> Option<F>) {
        if query.modal.as_deref() == Some("create") {
            self.modal = Modal::Create;
            self.form = blank;
        } else if let Some(id) = query.edit {
            match prefill(id) {
                Some(form) => {
                    self.modal = Modal::Edit(id);
                    self.form = form;
                }
                None => self.flash.error(format!("No se encontró el registro {id}")),
            }
        }
        if let Some(id) = query.confirm_delete {
            self.confirm_delete = Some(id);
        }
    }
}

/// True when every required field has non-blank content.
#[must_use]
pub fn required(fields: &[&str]) -> bool {
    fields.iter().all(|f| !f.trim().is_empty())
}

/// Non-blank trimmed text, or `None`.
#[must_use]
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A record other records point at by id.
pub trait Referenced {
    fn id(&self) -> i64;
    fn display_name(&self) -> &str;
}

impl Referenced for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.username
    }
}

impl Referenced for Greenhouse {
    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Resolve a foreign key for display by linear search, falling back to the
/// raw id.
#[must_use]
pub fn resolve_name<T: Referenced>(items: &[T], id: i64) -> String {
    items
        .iter()
        .find(|item| item.id() == id)
        .map_or_else(|| format!("ID: {id}"), |item| item.display_name().to_string())
}
