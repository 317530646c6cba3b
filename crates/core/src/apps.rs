//! Static app catalog and credential resolver.
//!
//! The catalog is a compile-time list of installable third-party
//! integrations (calendar, conferencing, payment). [`resolve`] matches a
//! user's stored credentials against it, keeping only non-secret fields:
//! nothing in this module ever sees a credential's key payload.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Capability category of an app, stored explicitly on each catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppCategory {
    Calendar,
    Payment,
    Unknown,
}

impl AppCategory {
    /// Derive a category from the app type's naming convention.
    ///
    /// `_calendar` suffix wins over `_payment`; anything else is
    /// [`AppCategory::Unknown`]. Catalog entries are declared with the
    /// category this function would produce for their type.
    pub fn from_app_type(app_type: &str) -> Self {
        if app_type.ends_with("_calendar") {
            AppCategory::Calendar
        } else if app_type.ends_with("_payment") {
            AppCategory::Payment
        } else {
            AppCategory::Unknown
        }
    }
}

/// A static catalog entry describing one installable integration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AppDescriptor {
    /// Unique key, e.g. `"google_calendar"`.
    pub app_type: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    pub category: AppCategory,
    /// Whether the integration is enabled in this deployment.
    pub installed: bool,
}

/// Redacted credential projection safe for client-facing surfaces.
///
/// Deliberately excludes the key payload; build one via
/// [`CredentialSummary::new`] from the id and type of a full row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialSummary {
    pub id: DbId,
    #[serde(rename = "type")]
    pub app_type: String,
}

impl CredentialSummary {
    pub fn new(id: DbId, app_type: impl Into<String>) -> Self {
        Self {
            id,
            app_type: app_type.into(),
        }
    }
}

/// A catalog entry together with the user's matching credentials.
#[derive(Debug, Clone, Serialize)]
pub struct AppWithCredentials {
    #[serde(rename = "type")]
    pub app_type: &'static str,
    pub name: &'static str,
    pub category: AppCategory,
    pub installed: bool,
    pub credentials: Vec<CredentialSummary>,
}

impl AppWithCredentials {
    /// First matching credential, if any.
    ///
    /// Compatibility accessor for callers that predate the full list;
    /// derived from `credentials`, never stored separately.
    pub fn credential(&self) -> Option<&CredentialSummary> {
        self.credentials.first()
    }
}

/// Integrations that work without a stored credential.
///
/// `has_usable_integration` treats these as usable when installed even if
/// the user has no credential rows for them.
const ZERO_CONFIG_TYPES: &[&str] = &[
    "daily_video",
    "jitsi_video",
    "huddle01_video",
    "tandem_video",
];

/// The deployment's app catalog.
pub static CATALOG: &[AppDescriptor] = &[
    AppDescriptor {
        app_type: "google_calendar",
        name: "Google Calendar",
        category: AppCategory::Calendar,
        installed: true,
    },
    AppDescriptor {
        app_type: "office365_calendar",
        name: "Office 365 Calendar",
        category: AppCategory::Calendar,
        installed: true,
    },
    AppDescriptor {
        app_type: "caldav_calendar",
        name: "CalDav Server",
        category: AppCategory::Calendar,
        installed: true,
    },
    AppDescriptor {
        app_type: "apple_calendar",
        name: "Apple Calendar",
        category: AppCategory::Calendar,
        installed: true,
    },
    AppDescriptor {
        app_type: "zoom_video",
        name: "Zoom",
        category: AppCategory::Unknown,
        installed: true,
    },
    AppDescriptor {
        app_type: "daily_video",
        name: "Daily",
        category: AppCategory::Unknown,
        installed: true,
    },
    AppDescriptor {
        app_type: "jitsi_video",
        name: "Jitsi Meet",
        category: AppCategory::Unknown,
        installed: true,
    },
    AppDescriptor {
        app_type: "huddle01_video",
        name: "Huddle01",
        category: AppCategory::Unknown,
        installed: true,
    },
    AppDescriptor {
        app_type: "tandem_video",
        name: "Tandem",
        category: AppCategory::Unknown,
        installed: true,
    },
    AppDescriptor {
        app_type: "stripe_payment",
        name: "Stripe",
        category: AppCategory::Payment,
        installed: true,
    },
    AppDescriptor {
        app_type: "metamask_web3",
        name: "MetaMask",
        category: AppCategory::Unknown,
        installed: true,
    },
];

/// Match credentials against a catalog.
///
/// Returns one entry per catalog descriptor, in catalog order. Each
/// entry's credential list contains exactly the input credentials whose
/// type equals the descriptor's type.
pub fn resolve(
    catalog: &'static [AppDescriptor],
    credentials: &[CredentialSummary],
) -> Vec<AppWithCredentials> {
    catalog
        .iter()
        .map(|app| AppWithCredentials {
            app_type: app.app_type,
            name: app.name,
            category: app.category,
            installed: app.installed,
            credentials: credentials
                .iter()
                .filter(|c| c.app_type == app.app_type)
                .cloned()
                .collect(),
        })
        .collect()
}

/// [`resolve`] against the deployment catalog.
pub fn resolve_for_user(credentials: &[CredentialSummary]) -> Vec<AppWithCredentials> {
    resolve(CATALOG, credentials)
}

/// Whether the user can actually use an integration of the given type.
///
/// Installed is necessary; beyond that, zero-config types need no
/// credential while everything else needs at least one.
pub fn has_usable_integration(apps: &[AppWithCredentials], app_type: &str) -> bool {
    apps.iter().any(|app| {
        app.app_type == app_type
            && app.installed
            && (ZERO_CONFIG_TYPES.contains(&app_type) || !app.credentials.is_empty())
    })
}

/// Whether the catalog contains an installed entry of the given type,
/// independent of credentials.
pub fn is_type_installed(app_type: &str) -> bool {
    CATALOG
        .iter()
        .any(|app| app.app_type == app_type && app.installed)
}

/// Display name for a catalog type.
///
/// Unknown types are a first-class error, not a silent placeholder.
pub fn display_name(app_type: &str) -> Result<&'static str, CoreError> {
    CATALOG
        .iter()
        .find(|app| app.app_type == app_type)
        .map(|app| app.name)
        .ok_or_else(|| CoreError::UnknownAppType(app_type.to_string()))
}

/// Category for an app type, derived from the naming convention.
pub fn category(app_type: &str) -> AppCategory {
    AppCategory::from_app_type(app_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cred(id: DbId, app_type: &str) -> CredentialSummary {
        CredentialSummary::new(id, app_type)
    }

    #[test]
    fn resolve_returns_one_entry_per_catalog_app() {
        let creds = vec![cred(1, "google_calendar"), cred(2, "stripe_payment")];
        let resolved = resolve(CATALOG, &creds);
        assert_eq!(resolved.len(), CATALOG.len());
    }

    #[test]
    fn resolve_preserves_catalog_order() {
        let resolved = resolve(CATALOG, &[]);
        let types: Vec<_> = resolved.iter().map(|a| a.app_type).collect();
        let expected: Vec<_> = CATALOG.iter().map(|a| a.app_type).collect();
        assert_eq!(types, expected);
    }

    #[test]
    fn resolve_filters_by_exact_type_equality() {
        let creds = vec![
            cred(1, "google_calendar"),
            cred(2, "google_calendar"),
            cred(3, "zoom_video"),
            // Not in the catalog: must not appear anywhere.
            cred(4, "example_other"),
        ];
        let resolved = resolve(CATALOG, &creds);

        let gcal = resolved
            .iter()
            .find(|a| a.app_type == "google_calendar")
            .unwrap();
        assert_eq!(gcal.credentials, vec![cred(1, "google_calendar"), cred(2, "google_calendar")]);

        let zoom = resolved.iter().find(|a| a.app_type == "zoom_video").unwrap();
        assert_eq!(zoom.credentials, vec![cred(3, "zoom_video")]);

        let total: usize = resolved.iter().map(|a| a.credentials.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn credential_accessor_is_first_match_or_none() {
        let creds = vec![cred(7, "google_calendar"), cred(8, "google_calendar")];
        let resolved = resolve(CATALOG, &creds);

        let gcal = resolved
            .iter()
            .find(|a| a.app_type == "google_calendar")
            .unwrap();
        assert_eq!(gcal.credential().unwrap().id, 7);

        let stripe = resolved
            .iter()
            .find(|a| a.app_type == "stripe_payment")
            .unwrap();
        assert!(stripe.credential().is_none());
    }

    #[test]
    fn credential_summary_never_serializes_a_key() {
        let json = serde_json::to_value(cred(5, "zoom_video")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 5, "type": "zoom_video"}));
    }

    #[test]
    fn usable_integration_requires_credential_for_regular_apps() {
        let resolved = resolve(CATALOG, &[]);
        assert!(!has_usable_integration(&resolved, "google_calendar"));

        let resolved = resolve(CATALOG, &[cred(1, "google_calendar")]);
        assert!(has_usable_integration(&resolved, "google_calendar"));
    }

    #[test]
    fn zero_config_apps_are_usable_without_credentials() {
        let resolved = resolve(CATALOG, &[]);
        assert!(has_usable_integration(&resolved, "daily_video"));
        assert!(has_usable_integration(&resolved, "jitsi_video"));
        assert!(!has_usable_integration(&resolved, "zoom_video"));
    }

    #[test]
    fn usable_integration_is_false_for_unknown_type() {
        let resolved = resolve(CATALOG, &[]);
        assert!(!has_usable_integration(&resolved, "example_other"));
    }

    #[test]
    fn type_installed_ignores_credentials() {
        assert!(is_type_installed("google_calendar"));
        assert!(is_type_installed("stripe_payment"));
        assert!(!is_type_installed("example_other"));
    }

    #[test]
    fn display_name_for_known_type() {
        assert_eq!(display_name("google_calendar").unwrap(), "Google Calendar");
        assert_eq!(display_name("stripe_payment").unwrap(), "Stripe");
    }

    #[test]
    fn display_name_for_unknown_type_is_an_explicit_error() {
        let err = display_name("example_other").unwrap_err();
        assert!(matches!(err, CoreError::UnknownAppType(t) if t == "example_other"));
    }

    #[test]
    fn category_follows_suffix_convention() {
        assert_eq!(category("google_calendar"), AppCategory::Calendar);
        assert_eq!(category("stripe_payment"), AppCategory::Payment);
        assert_eq!(category("zoom_video"), AppCategory::Unknown);
    }

    #[test]
    fn calendar_suffix_wins_over_payment() {
        // First match in the stated order: calendar before payment.
        assert_eq!(category("odd_payment_calendar"), AppCategory::Calendar);
    }

    #[test]
    fn catalog_categories_match_the_convention() {
        for app in CATALOG {
            assert_eq!(
                app.category,
                AppCategory::from_app_type(app.app_type),
                "catalog entry {} carries a category its type would not derive",
                app.app_type
            );
        }
    }

    #[test]
    fn catalog_types_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.app_type, b.app_type);
            }
        }
    }
}
