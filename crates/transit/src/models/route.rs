//! The route entity: a named line operated by an agency.

use crate::identifiers::RouteId;
use crate::models::types::RouteType;

/// Pure data holder for one route, as delivered by the loader.
///
/// `color` and `text_color` are hex RGB strings (for example `"BB0000"`)
/// passed through untouched for the drawing layer.
#[derive(Clone, Debug)]
pub struct Route {
    pub id: RouteId,
    pub agency_id: Option<String>,
    pub short_name: String,
    pub long_name: String,
    pub description: Option<String>,
    pub route_type: RouteType,
    pub url: Option<String>,
    pub color: Option<String>,
    pub text_color: Option<String>,
}

impl Route {
    /// Rider-facing label combining the short and long names. Falls back to
    /// whichever name exists, and to the id when the dataset supplies
    /// neither.
    pub fn display_label(&self) -> String {
        match (self.short_name.is_empty(), self.long_name.is_empty()) {
            (false, false) => format!("{} {}", self.short_name, self.long_name),
            (false, true) => self.short_name.clone(),
            (true, false) => self.long_name.clone(),
            (true, true) => self.id.to_string(),
        }
    }

    /// Mode name from the fixed taxonomy, `"Unknown"` for unmapped codes.
    pub fn kind_description(&self) -> &'static str {
        self.route_type.description()
    }
}
