//! セル値の変換
//!
//! calamineのセル値をJSONの最も狭いスカラー型へ変換する。

use calamine::Data;
use serde_json::{Number, Value};

/// 日時セルの出力書式
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// f64で誤差なく整数を表せる上限（2^53）
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

pub fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) if s.is_empty() => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => float_to_value(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => Value::String(datetime.format(DATETIME_FORMAT).to_string()),
            None => float_to_value(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        // #DIV/0! などは欠損扱い
        Data::Error(_) => Value::Null,
    }
}

/// 整数値のfloatは整数に、NaN/無限大はnullに
fn float_to_value(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < MAX_SAFE_INTEGER {
        return Value::from(f as i64);
    }
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}

/// ヘッダーセルの列名
///
/// 空セルは `Unnamed: {列番号}`（0始まり）。
pub fn header_name(cell: &Data, index: usize) -> String {
    match cell_to_value(cell) {
        Value::String(s) => s,
        Value::Null => format!("Unnamed: {}", index),
        value => value.to_string(),
    }
}
