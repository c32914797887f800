//! START Network alert feed.
//!
//! The feed is a CSV export of START Fund alerts. Each row names a country
//! (free text, sometimes with a bracketed qualifier), an alert date in one
//! of two layouts and the awarded amount with currency decoration. Rows
//! whose country or date cannot be resolved are dropped.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use go_core::enums::CronJobStatus;
use go_core::feed::{
    normalize_country_name, parse_alert_date, parse_amount, parse_csv_records, CsvRecord,
};
use go_db::models::country::Country;
use go_db::models::country_overview::CountryOverview;
use go_db::models::cron_job::NewCronJob;
use go_db::repositories::{CountryOverviewRepo, CountryRepo, CronJobRepo};
use reqwest::StatusCode;
use serde::Serialize;

use super::{Source, SourceContext, SourceData};
use crate::error::DatabankError;

/// Job name recorded in `cron_jobs`.
pub const NAME: &str = "START_NETWORK";

const COL_COUNTRY: &str = "Country";
const COL_ALERT_DATE: &str = "Alert date";
const COL_ALERT: &str = "Alert";
const COL_ALERT_TYPE: &str = "Alert type";
const COL_AMOUNT: &str = "Amount Awarded";
const COL_CRISIS_TYPE: &str = "Crisis Type";

/// One alert as stored in `country_overviews.start_network_data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartNetworkAlert {
    /// ISO-8601 local date-time, e.g. `2019-03-05T14:00:30`.
    pub date: String,
    pub alert: String,
    pub alert_type: String,
    pub amount_awarded: Option<i64>,
    pub crisis_type: String,
}

/// Alerts grouped by upper-case ISO2, plus the number of rows accepted.
#[derive(Debug, Default)]
pub struct GroupedAlerts {
    pub by_country: BTreeMap<String, Vec<StartNetworkAlert>>,
    pub accepted: usize,
}

pub struct StartNetwork {
    url: String,
}

impl StartNetwork {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Source for StartNetwork {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn prefetch(&self, ctx: &SourceContext) -> Result<SourceData, DatabankError> {
        let response = ctx.http.get(&self.url).send().await?;

        if response.status() != StatusCode::OK {
            tracing::warn!(status = %response.status(), url = %self.url, "START Network feed request failed");
            let job = NewCronJob::new(
                NAME,
                CronJobStatus::Erroneous.id(),
                format!("Error querying StartNetwork feed at {}", self.url),
            );
            CronJobRepo::create(&ctx.pool, &job).await?;
            return Ok(SourceData::new());
        }

        let body = response.text().await?;
        let records = if body.trim().is_empty() {
            Vec::new()
        } else {
            parse_csv_records(&body).map_err(DatabankError::Feed)?
        };

        let countries = CountryRepo::list_all(&ctx.pool).await?;
        let index = country_index(&countries);
        let grouped = group_alerts(&records, |name| index.get(&name.to_lowercase()).cloned())?;

        let mut job = NewCronJob::new(
            NAME,
            CronJobStatus::Successful.id(),
            format!("Done querying StartNetwork feed at {}", self.url),
        );
        job.num_result = i32::try_from(grouped.accepted).unwrap_or(i32::MAX);
        CronJobRepo::create(&ctx.pool, &job).await?;

        tracing::info!(
            rows = records.len(),
            accepted = grouped.accepted,
            countries = grouped.by_country.len(),
            "START Network feed aggregated"
        );

        grouped
            .by_country
            .into_iter()
            .map(|(iso, alerts)| Ok::<_, DatabankError>((iso, serde_json::to_value(alerts)?)))
            .collect()
    }

    async fn load(
        &self,
        ctx: &SourceContext,
        country: &Country,
        overview: &CountryOverview,
        data: &SourceData,
    ) -> Result<(), DatabankError> {
        let Some(iso) = country.iso.as_deref() else {
            return Ok(());
        };
        let Some(alerts) = data.get(&iso.to_uppercase()) else {
            return Ok(());
        };
        CountryOverviewRepo::set_start_network_data(&ctx.pool, overview.id, alerts).await?;
        Ok(())
    }
}

/// Map lower-cased country names to upper-case ISO2 codes.
///
/// Countries without an ISO code cannot be keyed and are left out.
pub fn country_index(countries: &[Country]) -> HashMap<String, String> {
    countries
        .iter()
        .filter_map(|c| {
            let iso = c.iso.as_deref()?.trim();
            (!iso.is_empty()).then(|| (c.name.trim().to_lowercase(), iso.to_uppercase()))
        })
        .collect()
}

/// Turn feed rows into per-country alerts.
///
/// `resolve_iso` maps a normalized country name to its ISO2 code. Rows with
/// an unknown country or an unparseable date are skipped and not counted.
pub fn group_alerts<F>(
    records: &[CsvRecord],
    resolve_iso: F,
) -> Result<GroupedAlerts, DatabankError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut grouped = GroupedAlerts::default();

    for row in records {
        let name = normalize_country_name(column(row, COL_COUNTRY)?);
        let date = parse_alert_date(column(row, COL_ALERT_DATE)?);
        let (Some(iso), Some(date)) = (resolve_iso(name), date) else {
            continue;
        };

        let alert = StartNetworkAlert {
            date: date.format("%Y-%m-%dT%H:%M:%S").to_string(),
            alert: column(row, COL_ALERT)?.to_string(),
            alert_type: column(row, COL_ALERT_TYPE)?.to_string(),
            amount_awarded: parse_amount(column(row, COL_AMOUNT)?),
            crisis_type: column(row, COL_CRISIS_TYPE)?.to_string(),
        };
        grouped
            .by_country
            .entry(iso.to_uppercase())
            .or_default()
            .push(alert);
        grouped.accepted += 1;
    }

    Ok(grouped)
}

fn column<'a>(row: &'a CsvRecord, name: &str) -> Result<&'a str, DatabankError> {
    row.get(name)
        .map(String::as_str)
        .ok_or_else(|| DatabankError::Feed(format!("missing column '{name}'")))
}
