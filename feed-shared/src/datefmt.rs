//! Brazilian Portuguese date formatting for post headers and comments.

use jiff::{
    Timestamp, Unit, Zoned,
    tz::{Offset, TimeZone},
};
use thiserror::Error;
use tracing::warn;

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

#[derive(Debug, Error)]
pub enum DateFmtErr {
    #[error("invalid utc offset {hours}h: {source}")]
    Offset {
        hours: i8,
        #[source]
        source: jiff::Error,
    },
}

#[derive(Debug, Clone)]
pub struct DateFmt {
    tz: TimeZone,
}

impl DateFmt {
    pub fn new(utc_offset_hours: i8) -> Result<Self, DateFmtErr> {
        let offset = Offset::from_hours(utc_offset_hours).map_err(|source| DateFmtErr::Offset {
            hours: utc_offset_hours,
            source,
        })?;

        Ok(Self {
            tz: TimeZone::fixed(offset),
        })
    }

    fn zoned(&self, ts: Timestamp) -> Zoned {
        ts.to_zoned(self.tz.clone())
    }

    /// `d 'de' LLLL 'às' HH:mm'h'`, e.g. `3 de agosto às 20:40h`.
    pub fn absolute(&self, ts: Timestamp) -> String {
        let zoned = self.zoned(ts);
        format!(
            "{} de {} às {:02}:{:02}h",
            zoned.day(),
            month_name(zoned.month()),
            zoned.hour(),
            zoned.minute()
        )
    }

    /// Machine readable value for `<time datetime>`.
    pub fn datetime_attr(&self, ts: Timestamp) -> String {
        let zoned = self.zoned(ts);
        format!(
            "{:04}-{:02}-{:02} {:02}:{:02}",
            zoned.year(),
            zoned.month(),
            zoned.day(),
            zoned.hour(),
            zoned.minute()
        )
    }

    /// Distance between `ts` and `now` with a suffix: `há ...` for the past, `em ...` for the future.
    pub fn relative(&self, ts: Timestamp, now: Timestamp) -> String {
        let is_future = ts > now;
        let (earlier, later) = if is_future { (now, ts) } else { (ts, now) };
        let distance = self.distance(earlier, later);

        if is_future {
            format!("em {distance}")
        } else {
            format!("há {distance}")
        }
    }

    fn distance(&self, earlier: Timestamp, later: Timestamp) -> String {
        let seconds = later.as_second() - earlier.as_second();
        let minutes = round_div(seconds, 60);

        if minutes < 2 {
            return if minutes == 0 {
                "menos de um minuto".to_string()
            } else {
                plural(minutes, "minuto", "minutos")
            };
        }
        if minutes < 45 {
            return plural(minutes, "minuto", "minutos");
        }
        if minutes < 90 {
            return "cerca de 1 hora".to_string();
        }
        if minutes < MINUTES_IN_DAY {
            return format!("cerca de {}", plural(round_div(minutes, 60), "hora", "horas"));
        }
        if minutes < 2520 {
            return "1 dia".to_string();
        }
        if minutes < MINUTES_IN_MONTH {
            return plural(round_div(minutes, MINUTES_IN_DAY), "dia", "dias");
        }
        if minutes < MINUTES_IN_TWO_MONTHS {
            return format!(
                "cerca de {}",
                plural(round_div(minutes, MINUTES_IN_MONTH), "mês", "meses")
            );
        }

        let months = self.calendar_months(earlier, later, minutes);
        if months < 12 {
            return plural(round_div(minutes, MINUTES_IN_MONTH), "mês", "meses");
        }

        let years = months / 12;
        match months % 12 {
            0..3 => format!("cerca de {}", plural(years, "ano", "anos")),
            3..9 => format!("mais de {}", plural(years, "ano", "anos")),
            _ => format!("quase {}", plural(years + 1, "ano", "anos")),
        }
    }

    fn calendar_months(&self, earlier: Timestamp, later: Timestamp, minutes: i64) -> i64 {
        let earlier = self.zoned(earlier);
        match self.zoned(later).since((Unit::Month, &earlier)) {
            Ok(span) => i64::from(span.get_months()),
            Err(err) => {
                warn!("calendar month difference failed: {err}");
                minutes / MINUTES_IN_MONTH
            }
        }
    }
}

fn month_name(month: i8) -> &'static str {
    usize::try_from(month - 1)
        .ok()
        .and_then(|i| MONTHS.get(i))
        .copied()
        .unwrap_or_default()
}

fn plural(count: i64, one: &str, other: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {other}")
    }
}

/// Division rounding half away from zero, for non-negative inputs.
fn round_div(value: i64, by: i64) -> i64 {
    (value + by / 2) / by
}
