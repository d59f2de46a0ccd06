use tracing::debug;

use crate::config::constants::LAST_RESORT_SOURCE_LIMIT;
use crate::config::preferences::SitingPreferences;
use crate::models::renewable::RenewableSite;

/// Which relaxation stage produced the candidate source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTier {
    Strict,
    Relaxed,
    LastResort,
}

impl FilterTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterTier::Strict => "strict",
            FilterTier::Relaxed => "relaxed",
            FilterTier::LastResort => "last-resort",
        }
    }
}

/// Reduce a production-technology token to the renewable category it draws
/// from: the prefix before the first underscore, with bare electrolysis
/// treated as solar-powered.
pub fn renewable_category_token(technology: &str) -> &str {
    let token = match technology.split_once('_') {
        Some((prefix, _)) => prefix,
        None => technology,
    };
    if token.eq_ignore_ascii_case("electrolysis") {
        "solar"
    } else {
        token
    }
}

/// Whether a site's category satisfies the requested token. "electrolysis",
/// "any" and the empty token match every category; "solar" also accepts
/// sites catalogued as "photovoltaic".
pub fn category_matches(token: &str, site_category: &str) -> bool {
    if site_category.eq_ignore_ascii_case(token) {
        return true;
    }
    if token.is_empty()
        || token.eq_ignore_ascii_case("electrolysis")
        || token.eq_ignore_ascii_case("any")
    {
        return true;
    }
    token.eq_ignore_ascii_case("solar") && site_category.eq_ignore_ascii_case("photovoltaic")
}

/// Tiered source selection. Each stage only runs when the previous one came
/// up empty; the last resort ignores every constraint and takes the first
/// few sites in stored order.
pub fn filter_sources<'a>(
    sites: &'a [RenewableSite],
    prefs: &SitingPreferences,
) -> (Vec<&'a RenewableSite>, FilterTier) {
    let token = renewable_category_token(&prefs.technology);

    let strict: Vec<&RenewableSite> = sites
        .iter()
        .filter(|site| {
            prefs.region_matches(&site.region)
                && category_matches(token, &site.category)
                && site.capacity_mw >= prefs.min_capacity
        })
        .collect();
    if !strict.is_empty() {
        debug!(count = strict.len(), "strict filter matched");
        return (strict, FilterTier::Strict);
    }

    let relaxed: Vec<&RenewableSite> = sites
        .iter()
        .filter(|site| {
            prefs.region_matches(&site.region) && site.capacity_mw >= prefs.min_capacity
        })
        .collect();
    if !relaxed.is_empty() {
        debug!(count = relaxed.len(), "relaxed filter matched");
        return (relaxed, FilterTier::Relaxed);
    }

    let last_resort: Vec<&RenewableSite> =
        sites.iter().take(LAST_RESORT_SOURCE_LIMIT).collect();
    debug!(count = last_resort.len(), "falling back to stored order");
    (last_resort, FilterTier::LastResort)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(id: &str, category: &str, region: &str, capacity_mw: f64) -> RenewableSite {
        RenewableSite {
            id: id.to_string(),
            name: format!("Site {}", id),
            category: category.to_string(),
            latitude: 40.0,
            longitude: -100.0,
            country: "United States".to_string(),
            region: region.to_string(),
            capacity_mw,
            capacity_factor: 0.3,
        }
    }

    #[test]
    fn technology_token_takes_prefix_before_underscore() {
        assert_eq!(renewable_category_token("wind_offshore"), "wind");
        assert_eq!(renewable_category_token("hydro"), "hydro");
        assert_eq!(renewable_category_token("electrolysis"), "solar");
        assert_eq!(renewable_category_token("electrolysis_pem"), "solar");
    }

    #[test]
    fn solar_token_accepts_photovoltaic_sites() {
        assert!(category_matches("solar", "photovoltaic"));
        assert!(category_matches("solar", "Solar"));
        assert!(!category_matches("wind", "photovoltaic"));
    }

    #[test]
    fn wildcard_tokens_match_everything() {
        for token in ["any", ""] {
            assert!(category_matches(token, "geothermal"));
            assert!(category_matches(token, "wind"));
        }
    }

    #[test]
    fn strict_tier_applies_region_category_and_capacity() {
        let sites = vec![
            site("re_001", "solar", "North America", 500.0),
            site("re_002", "wind", "North America", 800.0),
            site("re_003", "solar", "Europe", 900.0),
            site("re_004", "solar", "North America", 50.0),
        ];
        let prefs = SitingPreferences {
            technology: "electrolysis".to_string(),
            min_capacity: 100.0,
            region: "north america".to_string(),
            ..Default::default()
        };
        let (matched, tier) = filter_sources(&sites, &prefs);
        assert_eq!(tier, FilterTier::Strict);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "re_001");
    }

    #[test]
    fn relaxed_tier_is_a_superset_of_strict() {
        // No geothermal sites in-region, so the category constraint drops.
        let sites = vec![
            site("re_001", "solar", "Europe", 500.0),
            site("re_002", "wind", "Europe", 800.0),
            site("re_003", "geothermal", "Asia", 300.0),
        ];
        let prefs = SitingPreferences {
            technology: "geothermal".to_string(),
            region: "Europe".to_string(),
            ..Default::default()
        };
        let (matched, tier) = filter_sources(&sites, &prefs);
        assert_eq!(tier, FilterTier::Relaxed);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn last_resort_caps_at_ten_in_stored_order() {
        let sites: Vec<RenewableSite> = (0..15)
            .map(|i| site(&format!("re_{:03}", i), "wind", "Asia", 100.0))
            .collect();
        let prefs = SitingPreferences {
            region: "Atlantis".to_string(),
            ..Default::default()
        };
        let (matched, tier) = filter_sources(&sites, &prefs);
        assert_eq!(tier, FilterTier::LastResort);
        assert_eq!(matched.len(), 10);
        assert_eq!(matched[0].id, "re_000");
        assert_eq!(matched[9].id, "re_009");
    }

    #[test]
    fn empty_dataset_is_empty_at_every_tier() {
        let (matched, tier) = filter_sources(&[], &SitingPreferences::default());
        assert!(matched.is_empty());
        assert_eq!(tier, FilterTier::LastResort);
    }
}
