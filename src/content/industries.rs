use super::catalog;
use super::model::{IndustryContent, NavEntry};
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Industry {
    Healthcare,
    Legal,
    HedgeFunds,
    Insurance,
    Banking,
    Manufacturing,
    Government,
    Enterprise,
    GeopoliticalAnalysts,
    CriticalInfrastructure,
    Investors,
    AdvancedLabs,
    Legislature,
    IntelligenceAgencies,
    HedgeFundsVc,
    OpioidCrisis,
    Myocarditis,
    SyntheticBiology,
    Disinformation,
    Litigation,
    FdaPrograms,
    CarbonCapture,
    ConflictZones,
}

impl Industry {
    /// Navigation order.
    pub const ALL: [Industry; 23] = [
        Industry::Healthcare,
        Industry::Legal,
        Industry::HedgeFundsVc,
        Industry::HedgeFunds,
        Industry::Insurance,
        Industry::Banking,
        Industry::Manufacturing,
        Industry::Government,
        Industry::Enterprise,
        Industry::GeopoliticalAnalysts,
        Industry::CriticalInfrastructure,
        Industry::Investors,
        Industry::AdvancedLabs,
        Industry::Legislature,
        Industry::IntelligenceAgencies,
        Industry::OpioidCrisis,
        Industry::Myocarditis,
        Industry::SyntheticBiology,
        Industry::Disinformation,
        Industry::Litigation,
        Industry::FdaPrograms,
        Industry::CarbonCapture,
        Industry::ConflictZones,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Industry::Healthcare => "healthcare",
            Industry::Legal => "legal",
            Industry::HedgeFunds => "hedge-funds",
            Industry::Insurance => "insurance",
            Industry::Banking => "banking",
            Industry::Manufacturing => "manufacturing",
            Industry::Government => "government",
            Industry::Enterprise => "enterprise",
            Industry::GeopoliticalAnalysts => "geopolitical-analysts",
            Industry::CriticalInfrastructure => "critical-infrastructure",
            Industry::Investors => "investors",
            Industry::AdvancedLabs => "advanced-labs",
            Industry::Legislature => "legislature",
            Industry::IntelligenceAgencies => "intelligence-agencies",
            Industry::HedgeFundsVc => "hedge-funds-vc",
            Industry::OpioidCrisis => "opioid-crisis",
            Industry::Myocarditis => "myocarditis",
            Industry::SyntheticBiology => "synthetic-biology",
            Industry::Disinformation => "disinformation",
            Industry::Litigation => "litigation",
            Industry::FdaPrograms => "fda-programs",
            Industry::CarbonCapture => "carbon-capture",
            Industry::ConflictZones => "conflict-zones",
        }
    }

    pub fn content(self) -> &'static IndustryContent {
        match self {
            Industry::Healthcare => &catalog::HEALTHCARE,
            Industry::Legal => &catalog::LEGAL,
            Industry::HedgeFunds => &catalog::HEDGE_FUNDS,
            Industry::Insurance => &catalog::INSURANCE,
            Industry::Banking => &catalog::BANKING,
            Industry::Manufacturing => &catalog::MANUFACTURING,
            Industry::Government => &catalog::GOVERNMENT,
            Industry::Enterprise => &catalog::ENTERPRISE,
            Industry::GeopoliticalAnalysts => &catalog::GEOPOLITICAL_ANALYSTS,
            Industry::CriticalInfrastructure => &catalog::CRITICAL_INFRASTRUCTURE,
            Industry::Investors => &catalog::INVESTORS,
            Industry::AdvancedLabs => &catalog::ADVANCED_LABS,
            Industry::Legislature => &catalog::LEGISLATURE,
            Industry::IntelligenceAgencies => &catalog::INTELLIGENCE_AGENCIES,
            Industry::HedgeFundsVc => &catalog::HEDGE_FUNDS_VC,
            Industry::OpioidCrisis => &catalog::OPIOID_CRISIS,
            Industry::Myocarditis => &catalog::MYOCARDITIS,
            Industry::SyntheticBiology => &catalog::SYNTHETIC_BIOLOGY,
            Industry::Disinformation => &catalog::DISINFORMATION,
            Industry::Litigation => &catalog::LITIGATION,
            Industry::FdaPrograms => &catalog::FDA_PROGRAMS,
            Industry::CarbonCapture => &catalog::CARBON_CAPTURE,
            Industry::ConflictZones => &catalog::CONFLICT_ZONES,
        }
    }

    pub fn route(self) -> Route {
        match self {
            Industry::Healthcare => Route::Healthcare,
            Industry::Legal => Route::Legal,
            Industry::HedgeFunds => Route::HedgeFunds,
            Industry::Insurance => Route::Insurance,
            Industry::Banking => Route::Banking,
            Industry::Manufacturing => Route::Manufacturing,
            Industry::Government => Route::Government,
            Industry::Enterprise => Route::Enterprise,
            Industry::GeopoliticalAnalysts => Route::GeopoliticalAnalysts,
            Industry::CriticalInfrastructure => Route::CriticalInfrastructure,
            Industry::Investors => Route::Investors,
            Industry::AdvancedLabs => Route::AdvancedLabs,
            Industry::Legislature => Route::Legislature,
            Industry::IntelligenceAgencies => Route::IntelligenceAgencies,
            Industry::HedgeFundsVc => Route::HedgeFundsVc,
            Industry::OpioidCrisis => Route::OpioidCrisis,
            Industry::Myocarditis => Route::Myocarditis,
            Industry::SyntheticBiology => Route::SyntheticBiology,
            Industry::Disinformation => Route::Disinformation,
            Industry::Litigation => Route::Litigation,
            Industry::FdaPrograms => Route::FdaPrograms,
            Industry::CarbonCapture => Route::CarbonCapture,
            Industry::ConflictZones => Route::ConflictZones,
        }
    }

    pub fn nav_entry(self) -> NavEntry {
        let content = self.content();
        NavEntry {
            name: content.name,
            icon: content.icon,
            route: self.route(),
            description: content.nav_description,
        }
    }
}

impl Route {
    pub fn industry(&self) -> Option<Industry> {
        Industry::ALL.into_iter().find(|industry| industry.route() == *self)
    }
}

/// Entries of the "Applications" dropdown and mobile menu.
pub fn application_entries() -> Vec<NavEntry> {
    Industry::ALL.iter().map(|industry| industry.nav_entry()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::PanelMode;
    use crate::interaction::disclosure::{Disclosure, DisclosureAction};
    use yew_router::Routable;

    #[test]
    fn every_industry_routes_to_its_slug() {
        for industry in Industry::ALL {
            let route = industry.route();
            assert_eq!(route.to_path(), format!("/{}", industry.slug()));
            assert_eq!(route.industry(), Some(industry));
        }
    }

    #[test]
    fn industries_are_unique() {
        for (i, a) in Industry::ALL.iter().enumerate() {
            for b in &Industry::ALL[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.slug(), b.slug());
            }
        }
    }

    #[test]
    fn interactive_sections_have_benefits() {
        for industry in Industry::ALL {
            let content = industry.content();
            assert!(!content.sections.is_empty(), "{} has no sections", content.name);
            if content.mode != PanelMode::Static {
                for section in content.sections {
                    assert!(
                        !section.benefits.is_empty(),
                        "{} / {} has nothing to disclose",
                        content.name,
                        section.title
                    );
                }
            }
        }
    }

    #[test]
    fn application_entries_cover_all_industries() {
        let entries = application_entries();
        assert_eq!(entries.len(), Industry::ALL.len());
        assert_eq!(entries[0].route, Route::Healthcare);
        assert!(entries.iter().all(|entry| entry.route.industry().is_some()));
    }

    #[test]
    fn non_industry_routes_have_no_content() {
        assert_eq!(Route::Home.industry(), None);
        assert_eq!(Route::Founder.industry(), None);
        assert_eq!(Route::NotFound.industry(), None);
    }

    #[test]
    fn accordion_page_toggles_one_section_at_a_time() {
        let content = Industry::HedgeFunds.content();
        assert_eq!(content.mode, PanelMode::Accordion);
        assert!(content.sections.len() >= 3);

        let mut disclosure = Disclosure::new(content.sections.len());
        disclosure.apply(DisclosureAction::Toggle(2));
        assert_eq!(disclosure.expanded(), Some(2));
        disclosure.apply(DisclosureAction::Toggle(2));
        assert_eq!(disclosure.expanded(), None);

        disclosure.apply(DisclosureAction::Toggle(0));
        disclosure.apply(DisclosureAction::Toggle(1));
        assert!(!disclosure.is_expanded(0));
        assert!(disclosure.is_expanded(1));
    }
}
