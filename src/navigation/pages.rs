// ============================================================================
// PAGES - Closed page catalog, one registry per audience
// ============================================================================

use std::fmt;

/// A fixed set of pages plus the page shown for ids outside the set
pub trait PageRegistry: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];
    const DEFAULT: Self;

    fn id(self) -> &'static str;
    fn title(self) -> &'static str;

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|page| page.id() == id)
    }

    /// Unknown ids land on the registry default
    fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or(Self::DEFAULT)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PublicPage {
    Home,
    Dashboard,
    Donations,
    Utilization,
    Reports,
    About,
}

impl PublicPage {
    /// Pages that bounce anonymous visitors back to home
    pub fn is_protected(self) -> bool {
        matches!(
            self,
            PublicPage::Dashboard
                | PublicPage::Donations
                | PublicPage::Utilization
                | PublicPage::Reports
        )
    }
}

impl PageRegistry for PublicPage {
    const ALL: &'static [Self] = &[
        PublicPage::Home,
        PublicPage::Dashboard,
        PublicPage::Donations,
        PublicPage::Utilization,
        PublicPage::Reports,
        PublicPage::About,
    ];
    const DEFAULT: Self = PublicPage::Home;

    fn id(self) -> &'static str {
        match self {
            PublicPage::Home => "home",
            PublicPage::Dashboard => "dashboard",
            PublicPage::Donations => "donations",
            PublicPage::Utilization => "utilization",
            PublicPage::Reports => "reports",
            PublicPage::About => "about",
        }
    }

    fn title(self) -> &'static str {
        match self {
            PublicPage::Home => "Home",
            PublicPage::Dashboard => "Dashboard",
            PublicPage::Donations => "Donations",
            PublicPage::Utilization => "Utilization",
            PublicPage::Reports => "Reports",
            PublicPage::About => "About",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DonorPage {
    Dashboard,
    Ngos,
    NgoDetails,
    Donations,
    Utilization,
    Reports,
    MakeDonation,
}

impl PageRegistry for DonorPage {
    const ALL: &'static [Self] = &[
        DonorPage::Dashboard,
        DonorPage::Ngos,
        DonorPage::NgoDetails,
        DonorPage::Donations,
        DonorPage::Utilization,
        DonorPage::Reports,
        DonorPage::MakeDonation,
    ];
    const DEFAULT: Self = DonorPage::Dashboard;

    fn id(self) -> &'static str {
        match self {
            DonorPage::Dashboard => "donor-dashboard",
            DonorPage::Ngos => "donor-ngos",
            DonorPage::NgoDetails => "donor-ngo-details",
            DonorPage::Donations => "donor-donations",
            DonorPage::Utilization => "donor-utilization",
            DonorPage::Reports => "donor-reports",
            DonorPage::MakeDonation => "donor-make-donation",
        }
    }

    fn title(self) -> &'static str {
        match self {
            DonorPage::Dashboard => "Dashboard",
            DonorPage::Ngos => "NGOs",
            DonorPage::NgoDetails => "NGO Details",
            DonorPage::Donations => "My Donations",
            DonorPage::Utilization => "Utilization Tracking",
            DonorPage::Reports => "Reports",
            DonorPage::MakeDonation => "Make a Donation",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NgoPage {
    Dashboard,
    DonorManagement,
    DonationRecords,
    Utilization,
    FundingRequest,
    FundingResponses,
    Reports,
    Profile,
}

impl PageRegistry for NgoPage {
    const ALL: &'static [Self] = &[
        NgoPage::Dashboard,
        NgoPage::DonorManagement,
        NgoPage::DonationRecords,
        NgoPage::Utilization,
        NgoPage::FundingRequest,
        NgoPage::FundingResponses,
        NgoPage::Reports,
        NgoPage::Profile,
    ];
    const DEFAULT: Self = NgoPage::Dashboard;

    fn id(self) -> &'static str {
        match self {
            NgoPage::Dashboard => "ngo-dashboard",
            NgoPage::DonorManagement => "ngo-donor-management",
            NgoPage::DonationRecords => "ngo-donation-records",
            NgoPage::Utilization => "ngo-utilization",
            NgoPage::FundingRequest => "ngo-funding-request",
            NgoPage::FundingResponses => "ngo-funding-responses",
            NgoPage::Reports => "ngo-reports",
            NgoPage::Profile => "ngo-profile",
        }
    }

    fn title(self) -> &'static str {
        match self {
            NgoPage::Dashboard => "Dashboard",
            NgoPage::DonorManagement => "Donors",
            NgoPage::DonationRecords => "Donations",
            NgoPage::Utilization => "Utilization",
            NgoPage::FundingRequest => "Funding Requests",
            NgoPage::FundingResponses => "Responses",
            NgoPage::Reports => "Reports",
            NgoPage::Profile => "Profile",
        }
    }
}

/// Which kind of record a detail page is parameterized by
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntityKind {
    Ngo,
    Donation,
}

/// Id a detail page falls back to when it never received one
pub const DEFAULT_ENTITY_ID: i64 = 1;

/// Every screen the app can render
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Page {
    Login,
    Public(PublicPage),
    Donor(DonorPage),
    Ngo(NgoPage),
}

impl Page {
    pub fn id(self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Public(page) => page.id(),
            Page::Donor(page) => page.id(),
            Page::Ngo(page) => page.id(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Login => "Sign In",
            Page::Public(page) => page.title(),
            Page::Donor(page) => page.title(),
            Page::Ngo(page) => page.title(),
        }
    }

    /// Detail pages that read the selected entity id
    pub fn entity_dependency(self) -> Option<EntityKind> {
        match self {
            Page::Donor(DonorPage::NgoDetails) => Some(EntityKind::Ngo),
            Page::Donor(DonorPage::Utilization) => Some(EntityKind::Donation),
            _ => None,
        }
    }

    /// Every renderable page, login included
    pub fn catalog() -> Vec<Page> {
        let mut pages = vec![Page::Login];
        pages.extend(PublicPage::ALL.iter().copied().map(Page::Public));
        pages.extend(DonorPage::ALL.iter().copied().map(Page::Donor));
        pages.extend(NgoPage::ALL.iter().copied().map(Page::Ngo));
        pages
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
