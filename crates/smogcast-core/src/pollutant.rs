//! The fixed pollutant feature schema.

use serde_json::{Map, Value};

use crate::{json_kind, ReadingError};

/// Number of input features the scaler and model were fit on.
pub const FEATURE_COUNT: usize = 12;

/// A single pollutant reading, in feature order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Pm25,
    Pm10,
    No,
    No2,
    Nox,
    Nh3,
    Co,
    So2,
    O3,
    Benzene,
    Toluene,
    Xylene,
}

impl Pollutant {
    /// All pollutants in the order the artifacts expect.
    pub const ALL: [Pollutant; FEATURE_COUNT] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No,
        Pollutant::No2,
        Pollutant::Nox,
        Pollutant::Nh3,
        Pollutant::Co,
        Pollutant::So2,
        Pollutant::O3,
        Pollutant::Benzene,
        Pollutant::Toluene,
        Pollutant::Xylene,
    ];

    /// Key used for this pollutant in `/predict` request bodies.
    pub fn request_key(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2_5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No => "NO",
            Pollutant::No2 => "NO2",
            Pollutant::Nox => "NOx",
            Pollutant::Nh3 => "NH3",
            Pollutant::Co => "CO",
            Pollutant::So2 => "SO2",
            Pollutant::O3 => "O3",
            Pollutant::Benzene => "Benzene",
            Pollutant::Toluene => "Toluene",
            Pollutant::Xylene => "Xylene",
        }
    }

    /// Column name the scaler was fit with.
    pub fn feature_name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            other => other.request_key(),
        }
    }
}

/// Feature column names in model order.
pub fn feature_names() -> [&'static str; FEATURE_COUNT] {
    Pollutant::ALL.map(Pollutant::feature_name)
}

/// Raw readings for one prediction request.
///
/// Every pollutant starts at 0.0; fields missing from the request keep that
/// default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PollutantReadings {
    pub pm2_5: f64,
    pub pm10: f64,
    pub no: f64,
    pub no2: f64,
    pub nox: f64,
    pub nh3: f64,
    pub co: f64,
    pub so2: f64,
    pub o3: f64,
    pub benzene: f64,
    pub toluene: f64,
    pub xylene: f64,
}

impl PollutantReadings {
    /// Builds readings from a JSON request body.
    ///
    /// Absent and `null` fields read as 0.0, booleans as 1.0/0.0, and numeric
    /// strings are parsed. Unknown keys are ignored.
    pub fn from_json(body: &Value) -> Result<Self, ReadingError> {
        let Value::Object(fields) = body else {
            return Err(ReadingError::NotAnObject(json_kind(body)));
        };
        Self::from_object(fields)
    }

    pub fn from_object(fields: &Map<String, Value>) -> Result<Self, ReadingError> {
        let mut readings = Self::default();
        for pollutant in Pollutant::ALL {
            if let Some(value) = fields.get(pollutant.request_key()) {
                readings.set(pollutant, coerce(pollutant.request_key(), value)?);
            }
        }
        Ok(readings)
    }

    pub fn set(&mut self, pollutant: Pollutant, value: f64) {
        let slot = match pollutant {
            Pollutant::Pm25 => &mut self.pm2_5,
            Pollutant::Pm10 => &mut self.pm10,
            Pollutant::No => &mut self.no,
            Pollutant::No2 => &mut self.no2,
            Pollutant::Nox => &mut self.nox,
            Pollutant::Nh3 => &mut self.nh3,
            Pollutant::Co => &mut self.co,
            Pollutant::So2 => &mut self.so2,
            Pollutant::O3 => &mut self.o3,
            Pollutant::Benzene => &mut self.benzene,
            Pollutant::Toluene => &mut self.toluene,
            Pollutant::Xylene => &mut self.xylene,
        };
        *slot = value;
    }

    /// Feature vector in model order.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.pm2_5,
            self.pm10,
            self.no,
            self.no2,
            self.nox,
            self.nh3,
            self.co,
            self.so2,
            self.o3,
            self.benzene,
            self.toluene,
            self.xylene,
        ]
    }
}

fn coerce(field: &'static str, value: &Value) -> Result<f64, ReadingError> {
    match value {
        Value::Null => Ok(0.0),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64().ok_or_else(|| ReadingError::NotANumber {
            field,
            value: n.to_string(),
        }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| ReadingError::NotANumber {
            field,
            value: s.clone(),
        }),
        other => Err(ReadingError::UnsupportedType {
            field,
            kind: json_kind(other),
        }),
    }
}
