/*
[INPUT]:  Event/market/series tickers and optional filters
[OUTPUT]: Events, markets, trades, order books, series and candlesticks as raw JSON
[POS]:    HTTP layer - market data endpoints
[UPDATE]: When adding new market endpoints or changing query parameters
*/

use chrono::{DateTime, TimeZone};
use serde_json::Value;

use crate::http::{KalshiClient, QueryParams, Result};
use crate::time::{period_interval, seconds_since_epoch};
use crate::types::{GetEventsParams, GetMarketsParams, GetSeriesListParams, GetTradesParams};

/// `get_markets` always carries this fragment; a caller `limit` is appended after it.
// TODO: confirm which of two `limit` values the exchange honors before dropping one.
const MARKETS_PATH: &str = "/markets?limit=1000";

impl KalshiClient {
    /// List events
    ///
    /// GET /events
    pub async fn get_events(&self, params: &GetEventsParams) -> Result<Value> {
        let query = QueryParams::from_serialize(params)?;
        self.get("/events", Some(&query)).await
    }

    /// GET /events/{event_ticker}?with_nested_markets={bool}
    pub async fn get_event(
        &self,
        event_ticker: &str,
        with_nested_markets: Option<bool>,
    ) -> Result<Value> {
        let mut query = QueryParams::new();
        query.push_opt("with_nested_markets", with_nested_markets);
        self.get(&format!("/events/{event_ticker}"), Some(&query))
            .await
    }

    /// List markets
    ///
    /// GET /markets?limit=1000&{params}
    pub async fn get_markets(&self, params: &GetMarketsParams) -> Result<Value> {
        let query = QueryParams::from_serialize(params)?;
        self.get(MARKETS_PATH, Some(&query)).await
    }

    /// GET /markets/trades
    pub async fn get_trades(&self, params: &GetTradesParams) -> Result<Value> {
        let query = QueryParams::from_serialize(params)?;
        self.get("/markets/trades", Some(&query)).await
    }

    /// GET /markets/{market_ticker}
    pub async fn get_market(&self, market_ticker: &str) -> Result<Value> {
        self.get(&format!("/markets/{market_ticker}"), None).await
    }

    /// GET /markets/{market_ticker}/orderbook?depth={depth}
    pub async fn get_market_orderbook(
        &self,
        market_ticker: &str,
        depth: Option<u32>,
    ) -> Result<Value> {
        let mut query = QueryParams::new();
        query.push_opt("depth", depth);
        self.get(&format!("/markets/{market_ticker}/orderbook"), Some(&query))
            .await
    }

    /// GET /series/
    pub async fn get_series_list(&self, params: &GetSeriesListParams) -> Result<Value> {
        let query = QueryParams::from_serialize(params)?;
        self.get("/series/", Some(&query)).await
    }

    /// GET /series/{series_ticker}
    pub async fn get_series(&self, series_ticker: &str) -> Result<Value> {
        self.get(&format!("/series/{series_ticker}"), None).await
    }

    /// Candlesticks for one market between two instants
    ///
    /// GET /series/{series_ticker}/markets/{market_ticker}/candlesticks
    ///
    /// `period_interval` must be "minute", "hour" or "day"; anything else fails
    /// with `InvalidArgument` before a request is sent.
    pub async fn get_market_candlesticks<Tz: TimeZone>(
        &self,
        series_ticker: &str,
        market_ticker: &str,
        start_ts: &DateTime<Tz>,
        end_ts: &DateTime<Tz>,
        period: &str,
    ) -> Result<Value> {
        let mut query = QueryParams::new();
        query.push("start_ts", seconds_since_epoch(start_ts));
        query.push("end_ts", seconds_since_epoch(end_ts));
        query.push("period_interval", period_interval(period)?);

        self.get(
            &format!("/series/{series_ticker}/markets/{market_ticker}/candlesticks"),
            Some(&query),
        )
        .await
    }
}
