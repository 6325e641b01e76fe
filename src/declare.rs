use serde::Serialize;

use crate::util::text;

/// 対応する法定通貨
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Currency {
    USD,
    EUR,
    JPY,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::JPY => "JPY",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::JPY => "¥",
        }
    }

    /// Decimal places used when displaying an amount, matching the
    /// denomination granularity of each currency.
    pub fn decimals(&self) -> usize {
        match self {
            Currency::USD | Currency::EUR => 2,
            Currency::JPY => 0,
        }
    }

    pub fn iterator() -> impl Iterator<Item = Self> {
        [Self::USD, Self::EUR, Self::JPY].iter().copied()
    }
}

/// Price and 24-hour change in one currency, copied verbatim from the
/// upstream response.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct CurrencyQuote {
    #[serde(rename = "価格")]
    pub price: f64,
    #[serde(rename = "24時間変動")]
    pub change_24h: f64,
}

/// Bitcoin prices in every configured currency plus the provider-side
/// refresh time. `last_updated` belongs to the asset, not to a currency,
/// which is why it sits beside the quotes instead of inside them.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CoinPrices {
    #[serde(rename = "USD")]
    pub usd: CurrencyQuote,
    #[serde(rename = "EUR")]
    pub eur: CurrencyQuote,
    #[serde(rename = "JPY")]
    pub jpy: CurrencyQuote,
    #[serde(rename = "最終更新")]
    pub last_updated: String,
}

impl CoinPrices {
    pub fn quote(&self, currency: Currency) -> &CurrencyQuote {
        match currency {
            Currency::USD => &self.usd,
            Currency::EUR => &self.eur,
            Currency::JPY => &self.jpy,
        }
    }
}

/// The one value this program produces: built atomically per invocation,
/// printed once, then discarded.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PriceReport {
    #[serde(rename = "タイムスタンプ")]
    pub captured_at: String,
    #[serde(rename = "ビットコイン")]
    pub bitcoin: CoinPrices,
}

impl PriceReport {
    /// The structured dump: 2-space indentation, Japanese field names.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The human-readable block printed after the structured dump.
    pub fn summary(&self) -> String {
        let mut lines = String::with_capacity(256);
        lines.push_str("ビットコイン価格サマリー:\n");
        lines.push_str(&format!("時刻: {}\n", self.captured_at));

        for currency in Currency::iterator() {
            let quote = self.bitcoin.quote(currency);
            lines.push_str(&format!(
                "{code}: {symbol}{price} ({change:.2}%)\n",
                code = currency.code(),
                symbol = currency.symbol(),
                price = text::format_with_commas(quote.price, currency.decimals()),
                change = quote.change_24h
            ));
        }

        lines.push_str(&format!("最終更新: {}", self.bitcoin.last_updated));
        lines
    }
}
