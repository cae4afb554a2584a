//! Response-to-text renderers.
//!
//! Pure functions from typed responses to the display strings shown in
//! an output region; no network or UI involved, so every observable
//! output contract is testable in isolation.
//!
//! Two display conventions coexist deliberately and must not be unified:
//! the latest-price renderer suppresses optional lines whose value is
//! absent *or zero*, while the external-fetch renderer always prints the
//! line and substitutes a literal `N/A`.

use time::format_description::well_known::Iso8601;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::models::{
    AnalysisResult, ExternalFetchResult, HistoryResult, PortfolioResult, PriceRecord, SaveReceipt,
};

/// How many history records are displayed, regardless of how many the
/// server returned.
pub const HISTORY_DISPLAY_LIMIT: usize = 5;

/// US-style currency: `$1,234.56`, sign ahead of the `$` for negatives.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = format!("{:.2}", value.abs());
    let (whole, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let grouped = group_digits(whole);
    if negative {
        format!("-${grouped}.{fraction}")
    } else {
        format!("${grouped}.{fraction}")
    }
}

/// Thousands-grouped integer, used for counts and volumes.
pub fn format_count(value: i64) -> String {
    if value < 0 {
        format!("-{}", group_digits(&value.unsigned_abs().to_string()))
    } else {
        group_digits(&value.to_string())
    }
}

/// Unix seconds rendered as `YYYY-MM-DD HH:MM:SS` UTC. An out-of-range
/// timestamp falls back to the raw number.
pub fn format_timestamp(timestamp: i64) -> String {
    match OffsetDateTime::from_unix_timestamp(timestamp) {
        Ok(dt) => format_datetime(dt.date(), dt.hour(), dt.minute(), dt.second()),
        Err(_) => timestamp.to_string(),
    }
}

/// ISO datetime string reformatted like [`format_timestamp`]; shown raw
/// when it does not parse.
pub fn format_iso_datetime(value: &str) -> String {
    PrimitiveDateTime::parse(value, &Iso8601::DEFAULT)
        .map(|dt| format_datetime(dt.date(), dt.hour(), dt.minute(), dt.second()))
        .unwrap_or_else(|_| value.to_owned())
}

/// Uniform error line rendered into a region by every handler.
pub fn error_line(message: &str) -> String {
    format!("❌ Error: {message}")
}

/// Confirmation for a saved price, echoing the stored fields.
pub fn render_save_receipt(receipt: &SaveReceipt) -> String {
    let mut out = format!("✅ {}\n\n", receipt.message);
    out.push_str("Saved record:\n");
    out.push_str(&format!("Symbol: {}\n", receipt.data.symbol));
    out.push_str(&format!("Price: {}\n", format_currency(receipt.data.price)));
    out.push_str(&format!("Date: {}\n", receipt.data.date));
    out
}

/// Latest stored price. Optional lines appear only for present,
/// non-zero values; a `0` is treated as absent.
pub fn render_latest_price(record: &PriceRecord) -> String {
    let mut out = format!("📊 Latest price for {}\n", record.symbol);
    out.push_str(&format!("• Price: {}\n", format_currency(record.price)));
    out.push_str(&format!("• Date: {}\n", format_timestamp(record.timestamp)));

    if let Some(volume) = record.volume.filter(|v| *v != 0) {
        out.push_str(&format!("• Volume: {}\n", format_count(volume)));
    }
    if let Some(change) = record.change.filter(|c| *c != 0.0) {
        out.push_str(&format!("• Change: {}\n", format_currency(change)));
    }
    if let Some(percent) = record.change_percent.filter(|p| *p != 0.0) {
        out.push_str(&format!("• Change %: {percent}%\n"));
    }

    out
}

/// Aggregate statistics plus the five most recent records, in server
/// order.
pub fn render_history(result: &HistoryResult) -> String {
    let mut out = format!(
        "📈 History for {} ({} days)\n",
        result.symbol, result.period.days
    );
    out.push_str(&format!("Records: {}\n", result.statistics.count));
    out.push_str(&format!(
        "Highest price: {}\n",
        format_currency(result.statistics.max)
    ));
    out.push_str(&format!(
        "Lowest price: {}\n",
        format_currency(result.statistics.min)
    ));
    out.push_str(&format!(
        "Average: {}\n\n",
        format_currency(result.statistics.avg)
    ));

    out.push_str("Latest 5 records:\n");
    for (index, entry) in result.data.iter().take(HISTORY_DISPLAY_LIMIT).enumerate() {
        out.push_str(&format!(
            "{}. {} - {}\n",
            index + 1,
            format_timestamp(entry.timestamp),
            format_currency(entry.price)
        ));
    }

    out
}

/// Technical-analysis report. Each optional indicator group renders only
/// when the service computed it.
pub fn render_analysis(result: &AnalysisResult) -> String {
    let indicators = &result.indicators;

    let mut out = format!("📊 Technical analysis for {}\n", result.symbol);
    out.push_str(&format!(
        "Analysis date: {}\n",
        format_iso_datetime(&indicators.analysis_date)
    ));
    out.push_str(&format!("Data points: {}\n\n", indicators.data_points));

    out.push_str("Key indicators:\n");
    out.push_str(&format!(
        "• Current price: {}\n",
        format_currency(indicators.current_price)
    ));
    if let Some(sma) = indicators.sma_20 {
        out.push_str(&format!("• SMA 20: {}\n", format_currency(sma)));
    }
    if let Some(ema) = indicators.ema_12 {
        out.push_str(&format!("• EMA 12: {}\n", format_currency(ema)));
    }
    if let Some(volatility) = indicators.volatility {
        out.push_str(&format!("• Volatility: {volatility}%\n"));
    }

    if let Some(bands) = &indicators.bollinger_bands {
        out.push_str("\nBollinger Bands:\n");
        out.push_str(&format!("• Upper: {}\n", format_currency(bands.upper)));
        out.push_str(&format!("• Middle: {}\n", format_currency(bands.middle)));
        out.push_str(&format!("• Lower: {}\n", format_currency(bands.lower)));
    }

    if let Some(rec) = &indicators.recommendation {
        out.push_str(&format!("\n🎯 Recommendation: {}\n", rec.action));
        out.push_str(&format!("• Reason: {}\n", rec.reason));
        out.push_str(&format!("• Confidence: {}\n", rec.confidence));
    }

    out
}

/// Full portfolio: aggregate statistics, then one line per entry in
/// server order.
pub fn render_portfolio(result: &PortfolioResult) -> String {
    let stats = &result.statistics;

    let mut out = String::from("💼 Full portfolio\n");
    out.push_str(&format!("Unique symbols: {}\n", stats.total_symbols));
    out.push_str(&format!("Total records: {}\n", stats.total_records));
    out.push_str(&format!(
        "Highest price: {}\n",
        format_currency(stats.price_stats.highest)
    ));
    out.push_str(&format!(
        "Lowest price: {}\n",
        format_currency(stats.price_stats.lowest)
    ));
    out.push_str(&format!(
        "Average: {}\n\n",
        format_currency(stats.price_stats.average)
    ));

    out.push_str("Symbols in portfolio:\n");
    for entry in &result.portfolio {
        out.push_str(&format!(
            "• {}: {} ({})\n",
            entry.symbol,
            format_currency(entry.price),
            format_timestamp(entry.timestamp)
        ));
    }

    out
}

/// Refreshed quote from the upstream provider. Absent fields print a
/// literal `N/A`; zero volume and an empty trading day count as absent.
pub fn render_external_fetch(result: &ExternalFetchResult) -> String {
    let volume = match result.volume.filter(|v| *v != 0) {
        Some(volume) => format_count(volume),
        None => String::from("N/A"),
    };
    let trading_day = match result.latest_trading_day.as_deref() {
        Some(day) if !day.is_empty() => day.to_owned(),
        _ => String::from("N/A"),
    };

    let mut out = String::from("🌐 Price refreshed from provider\n");
    out.push_str(&format!("Symbol: {}\n", result.symbol));
    out.push_str(&format!("Price: {}\n", format_currency(result.price)));
    out.push_str(&format!("Change: {}\n", format_currency(result.change)));
    out.push_str(&format!("Change %: {}\n", result.change_percent));
    out.push_str(&format!("Volume: {volume}\n"));
    out.push_str(&format!("Latest trading day: {trading_day}\n"));
    out.push_str(&format!("Source: {}\n", result.source));
    out
}

fn format_datetime(date: time::Date, hour: u8, minute: u8, second: u8) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        date.year(),
        u8::from(date.month()),
        date.day(),
        hour,
        minute,
        second
    )
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (index + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
