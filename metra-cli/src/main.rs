//! Metra JSON-RPC front end
//!
//! Reads one JSON-RPC 2.0 request per line on stdin and writes one
//! response per line on stdout. Logs go to stderr.
//!
//! Methods:
//! - convert: Convert a value between two units
//! - parse: Parse "<number> <unit>" text into a quantity
//! - compare: Compare two quantities within a tolerance
//! - units: List the kinds, or the units of one kind
//! - abbreviation: Look up the units an abbreviation names
//!
//! Environment:
//! - METRA_LOCALE: default locale (en-US)
//! - METRA_DIGITS: default significant digits after the radix (2)
//! - RUST_LOG: log filter (info)

use std::env;
use std::io::{self, BufRead, Write};
use metra_core::number::MAX_DIGITS;
use metra_core::{Locale, MetraError, Severity};
use metra_units::{
    convert_any, AbbreviationCache, ComparisonType, FormatOptions, MatchCase, QuantityKind, QuantityParser,
    UnitId, UnitsError,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const SERVER_NAME: &str = "metra";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;
const UNITS_ERROR: i32 = -32000;

/// Defaults applied when a request does not override them
#[derive(Debug, Clone, PartialEq)]
struct Config {
    locale: Locale,
    digits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: Locale::default(),
            digits: 2,
        }
    }
}

impl Config {
    fn from_env() -> Self {
        Self::from_vars(env::var("METRA_LOCALE").ok(), env::var("METRA_DIGITS").ok())
    }

    fn from_vars(locale: Option<String>, digits: Option<String>) -> Self {
        let mut config = Config::default();
        if let Some(tag) = locale.filter(|t| !t.trim().is_empty()) {
            config.locale = Locale::new(tag.trim());
        }
        if let Some(raw) = digits {
            match raw.trim().parse::<usize>() {
                Ok(digits) if digits <= MAX_DIGITS => config.digits = digits,
                _ => warn!(value = %raw, "ignoring invalid METRA_DIGITS"),
            }
        }
        config
    }
}

#[derive(Debug, Deserialize)]
struct RpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct RpcResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcError>,
}

#[derive(Debug, Serialize)]
struct RpcError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl RpcError {
    fn invalid_params(details: impl Into<String>) -> Self {
        let err = MetraError::invalid_request(details);
        RpcError {
            code: INVALID_PARAMS,
            message: err.message.clone(),
            data: serde_json::to_value(&err).ok(),
        }
    }
}

impl From<UnitsError> for RpcError {
    fn from(err: UnitsError) -> Self {
        let code = match err.severity() {
            Severity::Error => UNITS_ERROR,
            Severity::Fatal => INTERNAL_ERROR,
        };
        let err = MetraError::from(err);
        RpcError {
            code,
            message: err.message.clone(),
            data: serde_json::to_value(&err).ok(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    info!(version = SERVER_VERSION, locale = %config.locale, digits = config.digits, "metra started");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                debug!("end of input");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let Some(response) = handle_line(&config, line) else {
                    continue;
                };
                if let Err(e) = write_response(&response) {
                    error!(error = %e, "failed to write response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!("metra shutting down");
}

fn write_response(response: &RpcResponse) -> io::Result<()> {
    let text = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    stdout.flush()
}

/// Handle one input line; notifications (no id) get no response
fn handle_line(config: &Config, line: &str) -> Option<RpcResponse> {
    let request: RpcRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "unparseable request");
            return Some(RpcResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(RpcError {
                    code: PARSE_ERROR,
                    message: format!("Parse error: {}", e),
                    data: None,
                }),
            });
        }
    };

    debug!(method = %request.method, "processing request");
    let response = handle_request(config, &request);
    if request.id.is_none() {
        debug!(method = %request.method, "notification processed");
        return None;
    }
    Some(response)
}

fn handle_request(config: &Config, request: &RpcRequest) -> RpcResponse {
    let params = request.params.as_ref();
    let result = match request.method.as_str() {
        "initialize" => Ok(handle_initialize(config)),
        "ping" => Ok(json!({})),
        "convert" => handle_convert(config, params),
        "parse" => handle_parse(config, params),
        "compare" => handle_compare(config, params),
        "units" => handle_units(config, params),
        "abbreviation" => handle_abbreviation(config, params),
        _ => Err(RpcError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize(config: &Config) -> JsonValue {
    json!({
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
        },
        "methods": ["convert", "parse", "compare", "units", "abbreviation", "ping"],
        "locale": config.locale,
        "digits": config.digits,
        "kinds": QuantityKind::ALL,
    })
}

fn str_param<'p>(params: Option<&'p JsonValue>, name: &str) -> Result<&'p str, RpcError> {
    params
        .and_then(|p| p.get(name))
        .and_then(|v| v.as_str())
        .ok_or_else(|| RpcError::invalid_params(format!("missing string parameter '{}'", name)))
}

fn opt_str_param<'p>(params: Option<&'p JsonValue>, name: &str) -> Option<&'p str> {
    params.and_then(|p| p.get(name)).and_then(|v| v.as_str())
}

fn f64_param(params: Option<&JsonValue>, name: &str) -> Result<f64, RpcError> {
    params
        .and_then(|p| p.get(name))
        .and_then(|v| v.as_f64())
        .ok_or_else(|| RpcError::invalid_params(format!("missing numeric parameter '{}'", name)))
}

fn kind_param(params: Option<&JsonValue>) -> Result<Option<QuantityKind>, RpcError> {
    opt_str_param(params, "kind")
        .map(|k| k.parse::<QuantityKind>().map_err(RpcError::invalid_params))
        .transpose()
}

fn locale_param(config: &Config, params: Option<&JsonValue>) -> Locale {
    opt_str_param(params, "locale").map_or_else(|| config.locale.clone(), Locale::new)
}

fn format_options(config: &Config, params: Option<&JsonValue>, locale: &Locale) -> Result<FormatOptions, RpcError> {
    let digits = match params.and_then(|p| p.get("digits")) {
        None => config.digits,
        Some(v) => v
            .as_u64()
            .filter(|&d| d <= MAX_DIGITS as u64)
            .map(|d| d as usize)
            .ok_or_else(|| {
                RpcError::invalid_params(format!("'digits' must be an integer between 0 and {}", MAX_DIGITS))
            })?,
    };
    Ok(FormatOptions::new().with_locale(locale.clone()).with_significant_digits(digits))
}

/// The kind in which both abbreviations name a unit
fn infer_kind(parser: &QuantityParser, from: &str, to: &str, locale: &Locale) -> Result<QuantityKind, RpcError> {
    let kinds: Vec<QuantityKind> = QuantityKind::ALL
        .into_iter()
        .filter(|&kind| {
            parser.parse_unit_any(from, kind, Some(locale)).is_ok()
                && parser.parse_unit_any(to, kind, Some(locale)).is_ok()
        })
        .collect();

    match kinds.as_slice() {
        [kind] => Ok(*kind),
        [] => Err(RpcError::invalid_params(format!(
            "no quantity kind has units '{}' and '{}'",
            from, to
        ))),
        _ => {
            let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
            Err(RpcError::invalid_params(format!(
                "'{}' and '{}' fit several kinds ({}); pass 'kind'",
                from,
                to,
                names.join(", ")
            )))
        }
    }
}

fn quantity_json(quantity: &metra_units::AnyQuantity, options: &FormatOptions) -> Result<JsonValue, RpcError> {
    let text = quantity.format(options, AbbreviationCache::shared())?;
    Ok(json!({
        "value": quantity.value(),
        "unit": quantity.unit().name(),
        "kind": quantity.kind(),
        "text": text,
    }))
}

fn handle_convert(config: &Config, params: Option<&JsonValue>) -> Result<JsonValue, RpcError> {
    let value = f64_param(params, "value")?;
    let from = str_param(params, "from")?;
    let to = str_param(params, "to")?;
    let locale = locale_param(config, params);
    let parser = QuantityParser::shared();

    let kind = match kind_param(params)? {
        Some(kind) => kind,
        None => infer_kind(&parser, from, to, &locale)?,
    };
    let source = parser.parse_unit_any(from, kind, Some(&locale))?;
    let target = parser.parse_unit_any(to, kind, Some(&locale))?;

    let converted = metra_units::AnyQuantity::new(convert_any(value, source, target)?, target)?;
    debug!(%source, %target, value, result = converted.value(), "converted");
    quantity_json(&converted, &format_options(config, params, &locale)?)
}

fn handle_parse(config: &Config, params: Option<&JsonValue>) -> Result<JsonValue, RpcError> {
    let text = str_param(params, "text")?;
    let kind = kind_param(params)?.ok_or_else(|| RpcError::invalid_params("missing string parameter 'kind'"))?;
    let locale = locale_param(config, params);

    let quantity = QuantityParser::shared().parse_any(text, kind, Some(&locale))?;
    quantity_json(&quantity, &format_options(config, params, &locale)?)
}

fn handle_compare(config: &Config, params: Option<&JsonValue>) -> Result<JsonValue, RpcError> {
    let a = str_param(params, "a")?;
    let b = str_param(params, "b")?;
    let kind = kind_param(params)?.ok_or_else(|| RpcError::invalid_params("missing string parameter 'kind'"))?;
    let tolerance = f64_param(params, "tolerance")?;
    let mode = match opt_str_param(params, "mode") {
        Some(m) => m.parse::<ComparisonType>().map_err(RpcError::invalid_params)?,
        None => ComparisonType::default(),
    };
    let locale = locale_param(config, params);
    let parser = QuantityParser::shared();

    let a = parser.parse_any(a, kind, Some(&locale))?;
    let b = parser.parse_any(b, kind, Some(&locale))?.to_unit(a.unit())?;
    let equal = metra_units::equals(a.value(), b.value(), tolerance, mode)?;

    Ok(json!({
        "equal": equal,
        "mode": mode,
        "difference": (a.value() - b.value()).abs(),
        "unit": a.unit().name(),
    }))
}

fn handle_units(config: &Config, params: Option<&JsonValue>) -> Result<JsonValue, RpcError> {
    let cache = AbbreviationCache::shared();
    let locale = locale_param(config, params);

    let Some(kind) = kind_param(params)? else {
        let kinds: Vec<JsonValue> = QuantityKind::ALL
            .into_iter()
            .map(|kind| {
                json!({
                    "kind": kind,
                    "dimensions": kind.base_dimensions().to_string(),
                    "base_unit": kind.base_unit().name(),
                })
            })
            .collect();
        return Ok(json!({ "kinds": kinds }));
    };

    let units: Vec<JsonValue> = kind
        .units()
        .into_iter()
        .map(|unit| {
            json!({
                "name": unit.name(),
                "abbreviations": cache.abbreviations_for_id(unit, Some(&locale)),
                "base": unit.is_base(),
            })
        })
        .collect();

    Ok(json!({
        "kind": kind,
        "dimensions": kind.base_dimensions().to_string(),
        "units": units,
    }))
}

fn handle_abbreviation(config: &Config, params: Option<&JsonValue>) -> Result<JsonValue, RpcError> {
    let abbreviation = str_param(params, "abbreviation")?;
    let kind = kind_param(params)?;
    let locale = locale_param(config, params);

    let units: Vec<UnitId> = AbbreviationCache::shared().units_for_abbreviation(
        abbreviation,
        kind,
        Some(&locale),
        MatchCase::Insensitive,
    );
    let units: Vec<JsonValue> = units
        .into_iter()
        .map(|u| json!({ "kind": u.kind, "unit": u.name() }))
        .collect();

    Ok(json!({
        "abbreviation": abbreviation,
        "locale": locale,
        "units": units,
    }))
}
