//! ADQL query and URL construction for the archive endpoints

use exo_common::mission;

const BUCKET_COLUMNS: &str = "pl_name, pl_orbper, pl_rade, sy_vmag, disc_year, discoverymethod";
const LEGACY_COLUMNS: &str = "pl_name,pl_orbper,pl_rade,sy_vmag,discoverymethod,disc_year";
/// Row cap applied by the relay fallback
const RELAY_ROW_LIMIT: u32 = 50;

/// One mission-specific query in the diverse fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionBucket {
    /// Mission label forced onto every row the bucket returns
    pub label: &'static str,
    /// `discoverymethod LIKE '%kw%'` alternatives
    pub method_keywords: &'static [&'static str],
    pub min_discovery_year: Option<i32>,
}

/// Buckets in fetch order. Earlier buckets win name collisions.
pub const MISSION_BUCKETS: [MissionBucket; 4] = [
    MissionBucket {
        label: mission::KEPLER,
        method_keywords: &["Transit"],
        min_discovery_year: None,
    },
    MissionBucket {
        label: mission::TESS,
        method_keywords: &["Transit", "TESS"],
        min_discovery_year: Some(2018),
    },
    MissionBucket {
        label: mission::GROUND_BASED,
        method_keywords: &["Radial Velocity", "Imaging"],
        min_discovery_year: None,
    },
    MissionBucket {
        label: mission::SPITZER,
        method_keywords: &["Transit", "Spitzer"],
        min_discovery_year: Some(2003),
    },
];

impl MissionBucket {
    /// `SELECT TOP {rows} ... WHERE <method> AND pl_name IS NOT NULL [AND disc_year >= y]`
    pub fn query(&self, rows: u32) -> String {
        let methods: Vec<String> = self
            .method_keywords
            .iter()
            .map(|keyword| format!("discoverymethod LIKE '%{}%'", keyword))
            .collect();
        let method_clause = match methods.len() {
            1 => methods[0].clone(),
            _ => format!("({})", methods.join(" OR ")),
        };

        let mut clause = format!("{} AND pl_name IS NOT NULL", method_clause);
        if let Some(year) = self.min_discovery_year {
            clause.push_str(&format!(" AND disc_year >= {}", year));
        }

        format!(
            "SELECT TOP {} {} FROM ps WHERE {} ORDER BY disc_year DESC",
            rows, BUCKET_COLUMNS, clause
        )
    }
}

/// Newest-first query without mission filtering. Also the diverse fetch's
/// broad fallback.
pub fn simplified_query(limit: u32) -> String {
    format!(
        "SELECT TOP {} pl_name, pl_orbper, pl_rade, sy_vmag, discoverymethod, disc_year \
         FROM ps WHERE pl_name IS NOT NULL ORDER BY disc_year DESC",
        limit
    )
}

/// First legacy attempt, using null ordering and a trailing `LIMIT`.
pub fn ordered_query(limit: u32) -> String {
    format!(
        "SELECT pl_name, pl_orbper, pl_rade, sy_vmag, discoverymethod, disc_year, pl_pubdate, pl_letter \
         FROM ps WHERE pl_name IS NOT NULL ORDER BY disc_year DESC NULLS LAST LIMIT {}",
        limit
    )
}

/// Form fields for a TAP POST.
pub fn tap_form(query: &str) -> [(&'static str, String); 2] {
    [("query", query.to_string()), ("format", "json".to_string())]
}

/// `application/x-www-form-urlencoded` body for the given fields.
pub fn encode_form(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// TAP GET URL carrying the query as a parameter.
pub fn tap_get_url(tap_sync: &str, query: &str) -> String {
    format!("{}?{}", tap_sync, encode_form(&tap_form(query)))
}

/// Legacy table API URL.
pub fn legacy_url(legacy_api: &str, limit: Option<u32>) -> String {
    let mut url = format!(
        "{}?table=exoplanets&format=json&select={}&where={}&order={}",
        legacy_api,
        LEGACY_COLUMNS,
        urlencoding::encode("pl_name is not null"),
        urlencoding::encode("disc_year desc"),
    );
    if let Some(limit) = limit {
        url.push_str(&format!("&limit={}", limit));
    }
    url
}

/// Legacy table API fetched through the public relay.
pub fn relay_url(cors_relay: &str, legacy_remote: &str) -> String {
    let target = legacy_url(legacy_remote, Some(RELAY_ROW_LIMIT));
    format!("{}?url={}", cors_relay, urlencoding::encode(&target))
}
