// ============================================================================
// CHROME - Navbar variant, menu entries and footer visibility
// ============================================================================

use serde::Serialize;

use crate::models::Role;
use crate::navigation::pages::{DonorPage, NgoPage, PageRegistry, PublicPage};

/// Navigation bar variant wrapped around the page
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chrome {
    /// Login screen: no navbar, no footer
    Hidden,
    Public,
    Donor,
    Ngo,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct MenuItem {
    pub page_id: &'static str,
    pub label: &'static str,
}

impl MenuItem {
    const fn new(page_id: &'static str, label: &'static str) -> Self {
        Self { page_id, label }
    }

    pub fn is_active(&self, current_page_id: &str) -> bool {
        self.page_id == current_page_id
    }
}

/// Pick the navbar from the raw request, independently of page resolution
pub fn resolve_chrome(page_id: &str, role: &Role, is_authenticated: bool) -> Chrome {
    if page_id == "login" {
        return Chrome::Hidden;
    }
    match role {
        Role::Donor if is_authenticated => Chrome::Donor,
        Role::Ngo if is_authenticated => Chrome::Ngo,
        _ => Chrome::Public,
    }
}

impl Chrome {
    pub fn show_navbar(self) -> bool {
        self != Chrome::Hidden
    }

    pub fn show_footer(self) -> bool {
        self != Chrome::Hidden
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Chrome::Hidden => "hidden",
            Chrome::Public => "public",
            Chrome::Donor => "donor",
            Chrome::Ngo => "ngo",
        }
    }

    /// Entries of the navbar menu, in display order
    pub fn menu(self, is_authenticated: bool) -> Vec<MenuItem> {
        match self {
            Chrome::Hidden => Vec::new(),
            Chrome::Public => {
                let mut items = vec![
                    MenuItem::new(PublicPage::Home.id(), "Home"),
                    MenuItem::new(PublicPage::About.id(), "About"),
                ];
                if is_authenticated {
                    items.extend([
                        MenuItem::new(PublicPage::Dashboard.id(), "Dashboard"),
                        MenuItem::new(PublicPage::Donations.id(), "Donations"),
                        MenuItem::new(PublicPage::Utilization.id(), "Utilization"),
                        MenuItem::new(PublicPage::Reports.id(), "Reports"),
                    ]);
                }
                items
            }
            Chrome::Donor => vec![
                MenuItem::new(DonorPage::Dashboard.id(), "Dashboard"),
                MenuItem::new(DonorPage::Ngos.id(), "NGOs"),
                MenuItem::new(DonorPage::Donations.id(), "My Donations"),
                MenuItem::new(DonorPage::Reports.id(), "Reports"),
            ],
            Chrome::Ngo => NgoPage::ALL
                .iter()
                .map(|page| MenuItem::new(page.id(), page.title()))
                .collect(),
        }
    }

    /// Highlighted button next to the menu, if any
    pub fn call_to_action(self, is_authenticated: bool) -> Option<MenuItem> {
        match self {
            Chrome::Public if !is_authenticated => Some(MenuItem::new("login", "Login")),
            Chrome::Donor => Some(MenuItem::new(DonorPage::MakeDonation.id(), "Donate Now")),
            _ => None,
        }
    }

    /// Whether the navbar offers a sign-out button
    pub fn offers_sign_out(self, is_authenticated: bool) -> bool {
        match self {
            Chrome::Hidden => false,
            Chrome::Public => is_authenticated,
            Chrome::Donor | Chrome::Ngo => true,
        }
    }
}
