use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::consts::STAMP_FORMAT;
use crate::error::AppError;

/// Where the run stamp is rendered. The default is the machine's local
/// time, matching what the logs have always held; a named IANA zone can
/// be forced for machines whose system zone is unreliable.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Read the clock once and render this run's stamp. Clock access is
    /// assumed to succeed; there is no error path here.
    pub(crate) fn stamp(self) -> String {
        format_stamp(self.now_fixed())
    }

    fn now_fixed(self) -> DateTime<FixedOffset> {
        let utc = Utc::now();
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }
}

/// Fixed-width stamp with UTC offset, e.g. "2026-08-06T09:15:02+0200".
pub(crate) fn format_stamp(at: DateTime<FixedOffset>) -> String {
    at.format(STAMP_FORMAT).to_string()
}
