/// CoinGecko 価格 API
pub mod coingecko;
