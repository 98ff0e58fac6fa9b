//! Reference Data Store — static role salary bands plus location, industry,
//! and company-size multipliers.
//!
//! Lookup policy: never fail. Unknown multiplier keys resolve to the neutral
//! 1.0; an unknown role falls back to the first role in the table. This
//! keeps both calculator operations total — validation is the caller's job.
//!
//! Constructed once at startup and carried in `AppState` behind an `Arc`;
//! tests may build alternate tables through the same constructor.

use serde::{Deserialize, Serialize};

use crate::benchmark::models::ExperienceLevel;

/// A `{p25, median, p75}` salary triple in whole dollars, before any
/// multiplier adjustment. Ordered: p25 <= median <= p75.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub p25: u32,
    pub median: u32,
    pub p75: u32,
}

/// One role's salary bands across the three experience levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSalaryBand {
    pub role: String,
    pub entry: Band,
    pub mid: Band,
    pub senior: Band,
}

impl RoleSalaryBand {
    pub fn band(&self, level: ExperienceLevel) -> &Band {
        match level {
            ExperienceLevel::Entry => &self.entry,
            ExperienceLevel::Mid => &self.mid,
            ExperienceLevel::Senior => &self.senior,
        }
    }
}

/// An ordered string-keyed multiplier table with an explicit
/// default-on-miss lookup. Insertion order is the order the form layer
/// displays its options in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierTable(Vec<(String, f64)>);

impl MultiplierTable {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self(entries)
    }

    /// Exact-key lookup; a missing key is the neutral adjustment 1.0.
    pub fn get_or_neutral(&self, key: &str) -> f64 {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, m)| *m)
            .unwrap_or(1.0)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }
}

/// The full static reference data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    roles: Vec<RoleSalaryBand>,
    locations: MultiplierTable,
    industries: MultiplierTable,
    company_sizes: MultiplierTable,
}

impl ReferenceData {
    /// `roles` must be non-empty — the first entry is the fallback band for
    /// unknown role names.
    pub fn new(
        roles: Vec<RoleSalaryBand>,
        locations: MultiplierTable,
        industries: MultiplierTable,
        company_sizes: MultiplierTable,
    ) -> Self {
        assert!(!roles.is_empty(), "reference data requires at least one role");
        Self {
            roles,
            locations,
            industries,
            company_sizes,
        }
    }

    /// Case-insensitive role lookup. Unknown roles fall back to the first
    /// role in the table rather than failing.
    pub fn band_for(&self, role: &str) -> &RoleSalaryBand {
        self.roles
            .iter()
            .find(|r| r.role.eq_ignore_ascii_case(role))
            .unwrap_or(&self.roles[0])
    }

    pub fn location_multiplier(&self, city: &str) -> f64 {
        self.locations.get_or_neutral(city)
    }

    pub fn industry_multiplier(&self, industry: &str) -> f64 {
        self.industries.get_or_neutral(industry)
    }

    pub fn size_multiplier(&self, company_size: &str) -> f64 {
        self.company_sizes.get_or_neutral(company_size)
    }

    // Vocabulary accessors for the form layer's select options.

    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.role.as_str()).collect()
    }

    pub fn location_names(&self) -> Vec<&str> {
        self.locations.keys()
    }

    pub fn industry_names(&self) -> Vec<&str> {
        self.industries.keys()
    }

    pub fn company_size_names(&self) -> Vec<&str> {
        self.company_sizes.keys()
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// The built-in market data set: 9 roles, 18 locations, 13 industries,
    /// 5 company-size buckets.
    pub fn builtin() -> Self {
        let role = |name: &str, entry: [u32; 3], mid: [u32; 3], senior: [u32; 3]| RoleSalaryBand {
            role: name.to_string(),
            entry: Band {
                p25: entry[0],
                median: entry[1],
                p75: entry[2],
            },
            mid: Band {
                p25: mid[0],
                median: mid[1],
                p75: mid[2],
            },
            senior: Band {
                p25: senior[0],
                median: senior[1],
                p75: senior[2],
            },
        };

        let roles = vec![
            role(
                "Software Engineer",
                [72_000, 85_000, 100_000],
                [105_000, 125_000, 150_000],
                [150_000, 178_000, 215_000],
            ),
            role(
                "Marketing Manager",
                [48_000, 58_000, 70_000],
                [70_000, 85_000, 105_000],
                [105_000, 128_000, 155_000],
            ),
            role(
                "Sales Representative",
                [40_000, 50_000, 62_000],
                [60_000, 75_000, 95_000],
                [90_000, 115_000, 145_000],
            ),
            role(
                "Product Manager",
                [75_000, 90_000, 108_000],
                [110_000, 135_000, 160_000],
                [155_000, 185_000, 225_000],
            ),
            role(
                "Designer",
                [52_000, 65_000, 78_000],
                [78_000, 95_000, 118_000],
                [118_000, 142_000, 175_000],
            ),
            role(
                "Financial Analyst",
                [55_000, 65_000, 78_000],
                [75_000, 92_000, 112_000],
                [110_000, 135_000, 165_000],
            ),
            role(
                "Customer Success Manager",
                [42_000, 52_000, 63_000],
                [62_000, 78_000, 95_000],
                [92_000, 112_000, 138_000],
            ),
            role(
                "Data Analyst",
                [55_000, 67_000, 80_000],
                [78_000, 95_000, 115_000],
                [112_000, 135_000, 162_000],
            ),
            role(
                "Operations Manager",
                [48_000, 58_000, 72_000],
                [68_000, 85_000, 105_000],
                [100_000, 125_000, 155_000],
            ),
        ];

        let pairs = |entries: &[(&str, f64)]| {
            MultiplierTable::new(
                entries
                    .iter()
                    .map(|(k, m)| (k.to_string(), *m))
                    .collect(),
            )
        };

        let locations = pairs(&[
            ("San Francisco", 1.35),
            ("New York", 1.30),
            ("Seattle", 1.25),
            ("Boston", 1.20),
            ("Los Angeles", 1.18),
            ("Austin", 1.08),
            ("Denver", 1.05),
            ("Chicago", 1.05),
            ("Atlanta", 0.98),
            ("Dallas", 0.97),
            ("Phoenix", 0.95),
            ("Minneapolis", 0.98),
            ("Portland", 1.05),
            ("Philadelphia", 1.05),
            ("Miami", 1.02),
            ("Detroit", 0.90),
            ("Remote", 1.00),
            ("Other", 1.00),
        ]);

        let industries = pairs(&[
            ("Technology", 1.15),
            ("Finance", 1.12),
            ("Healthcare", 1.05),
            ("Consulting", 1.08),
            ("E-commerce", 1.10),
            ("Manufacturing", 0.95),
            ("Education", 0.88),
            ("Government", 0.90),
            ("Nonprofit", 0.82),
            ("Media", 0.95),
            ("Retail", 0.90),
            ("Energy", 1.08),
            ("Other", 1.00),
        ]);

        let company_sizes = pairs(&[
            ("1-50", 0.90),
            ("51-200", 0.95),
            ("201-1000", 1.00),
            ("1001-5000", 1.05),
            ("5000+", 1.10),
        ]);

        Self::new(roles, locations, industries, company_sizes)
    }
}
