//! Static field registries for the LOKI record formats
//!
//! A registry maps the integer field code used on the wire to the field's
//! canonical name and its converter. The three registries are process-wide
//! constants, immutable after definition and safely shared across threads.
//!
//! Field codes and names follow the instrument documentation. Looking up a
//! code that is absent from a registry is always an error: an unrecognized
//! code indicates either a corrupt file or an undocumented instrument field,
//! neither of which may be silently dropped.

use super::converters::Converter;
use crate::{Error, Result};

/// One recognized field: code, canonical name, optional converter.
///
/// A `None` converter keeps the raw string as-is (free-text and identifier
/// fields).
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub code: u32,
    pub name: &'static str,
    pub converter: Option<Converter>,
}

impl FieldSpec {
    const fn new(code: u32, name: &'static str, converter: Option<Converter>) -> Self {
        Self {
            code,
            name,
            converter,
        }
    }
}

/// An immutable field table for one record format, ordered by code.
#[derive(Debug)]
pub struct FieldRegistry {
    name: &'static str,
    fields: &'static [FieldSpec],
}

impl FieldRegistry {
    const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    /// Name of the record format this registry describes
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up a field code, or `None` if the code is not registered
    pub fn get(&self, code: u32) -> Option<&FieldSpec> {
        self.fields
            .binary_search_by_key(&code, |spec| spec.code)
            .ok()
            .map(|index| &self.fields[index])
    }

    /// Look up a field code, failing with [`Error::UnknownFieldCode`] if the
    /// code is not registered
    pub fn lookup(&self, code: u32) -> Result<&FieldSpec> {
        self.get(code)
            .ok_or_else(|| Error::unknown_field_code(self.name, code))
    }

    /// All registered fields, in code order
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }
}

use Converter::{Date, Float, Integer, LocaleFloat, Time};

/// Field table of the time-indexed telemetry stream (.tmd), one
/// `code;value` field per line.
pub static TMD_FIELDS: FieldRegistry = FieldRegistry::new(
    "TMD",
    &[
        FieldSpec::new(1, "DEVICE", None), // LOKI device name
        FieldSpec::new(5, "GPS_LON", Some(LocaleFloat)), // longitude, +E -W
        FieldSpec::new(6, "GPS_LAT", Some(LocaleFloat)), // latitude, +N -S
        FieldSpec::new(10, "PRESS", Some(LocaleFloat)), // Aanderaa 4017D pressure [kPa]
        FieldSpec::new(11, "TEMP", Some(LocaleFloat)), // Aanderaa 4017D temperature [degC]
        FieldSpec::new(20, "OXY_CON", Some(LocaleFloat)), // Aanderaa 4330F oxygen concentration [mg/l]
        FieldSpec::new(21, "OXY_SAT", Some(LocaleFloat)), // Aanderaa 4330F oxygen saturation [%]
        FieldSpec::new(22, "OXY_TEMP", Some(LocaleFloat)), // Aanderaa 4330F oxygen temperature [degC]
        FieldSpec::new(30, "COND_COND", Some(LocaleFloat)), // Aanderaa 3919 conductivity [mS/cm]
        FieldSpec::new(31, "COND_TEMP", Some(LocaleFloat)), // Aanderaa 3919 temperature [degC]
        FieldSpec::new(32, "COND_SALY", Some(LocaleFloat)), // Aanderaa 3919 salinity [PSU]
        FieldSpec::new(33, "COND_DENS", Some(LocaleFloat)), // Aanderaa 3919 density [kg/m^3]
        FieldSpec::new(34, "COND_SSPEED", Some(LocaleFloat)), // Aanderaa 3919 sound speed [m/s]
        FieldSpec::new(40, "FLOUR_1", Some(LocaleFloat)),  // fluorescence
        FieldSpec::new(41, "FLOUR_CR", Some(LocaleFloat)), // HAARDT chlorophyll range
        FieldSpec::new(42, "FLOUR_CV", Some(LocaleFloat)), // HAARDT chlorophyll value
        FieldSpec::new(43, "FLOUR_TR", Some(LocaleFloat)), // HAARDT turbidity range
        FieldSpec::new(44, "FLOUR_TD", Some(LocaleFloat)), // HAARDT turbidity value
        FieldSpec::new(200, "ROLL", Some(LocaleFloat)),    // ISITEC roll [deg]
        FieldSpec::new(201, "PITCH", Some(LocaleFloat)),   // ISITEC pitch [deg]
        FieldSpec::new(202, "NICK", Some(LocaleFloat)),    // ISITEC nick [deg]
        FieldSpec::new(230, "LOKI_REC", None),             // recorder status
        FieldSpec::new(231, "LOKI_PIC", Some(Integer)),    // consecutive picture number
        FieldSpec::new(232, "LOKI_FRAME", Some(LocaleFloat)), // frame rate [fps]
        FieldSpec::new(235, "CAM_STAT", None),             // camera status
        FieldSpec::new(240, "HOUSE_STAT", None),           // housekeeping status
        FieldSpec::new(241, "HOUSE_T1", Some(LocaleFloat)), // housekeeping temperature 1 [degC]
        FieldSpec::new(242, "HOUSE_T2", Some(LocaleFloat)), // housekeeping temperature 2 [degC]
        FieldSpec::new(243, "HOUSE_VOLT", Some(LocaleFloat)), // housekeeping voltage [V]
    ],
);

/// Field table of the single-line sensor snapshot (.dat), keyed by 1-based
/// column position. Several columns are undocumented and deliberately share
/// the `UNKNOWN` name; positions missing from this table are skipped by the
/// parser.
pub static DAT_FIELDS: FieldRegistry = FieldRegistry::new(
    "DAT",
    &[
        FieldSpec::new(1, "FW_REV", None), // firmware version
        FieldSpec::new(2, "COND_SSPEED", Some(Float)), // sound speed
        FieldSpec::new(3, "COND_DENS", Some(Float)), // density
        FieldSpec::new(4, "COND_TEMP", Some(Float)), // temperature
        FieldSpec::new(5, "COND_COND", Some(Float)), // conductivity
        FieldSpec::new(6, "COND_SALY", Some(Float)), // salinity
        FieldSpec::new(7, "OXY_CON", Some(Float)), // oxygen concentration
        FieldSpec::new(8, "OXY_SAT", Some(Float)), // oxygen saturation
        FieldSpec::new(9, "OXY_TEMP", Some(Float)), // oxygen temperature
        FieldSpec::new(10, "HOUSE_T1", Some(Float)), // housekeeping temperature
        FieldSpec::new(11, "HOUSE_VOLT", Some(Float)), // housekeeping voltage
        FieldSpec::new(16, "FLOUR_1", Some(Float)), // fluorescence
        FieldSpec::new(17, "UNKNOWN", None),
        FieldSpec::new(18, "UNKNOWN", None),
        FieldSpec::new(19, "UNKNOWN", None),
        FieldSpec::new(20, "PRESS", Some(Float)), // pressure
        FieldSpec::new(21, "TEMP", Some(Float)),  // temperature
        FieldSpec::new(22, "UNKNOWN", None),
        FieldSpec::new(23, "LOKI_REC", None),  // recorder status
        FieldSpec::new(24, "LOKI_PIC", None),  // picture number
        FieldSpec::new(25, "LOKI_FRAME", None), // frame rate
        FieldSpec::new(26, "GPS_LAT", Some(Float)), // latitude
        FieldSpec::new(27, "GPS_LON", Some(Float)), // longitude
    ],
);

/// Field table of the deployment log (.log), same line format as TMD but
/// carrying cruise/station metadata.
pub static LOG_FIELDS: FieldRegistry = FieldRegistry::new(
    "LOG",
    &[
        FieldSpec::new(1, "DATE", Some(Date)), // start date, UTC
        FieldSpec::new(2, "TIME", Some(Time)), // start time, UTC
        FieldSpec::new(3, "PICTURE#", Some(Integer)), // current recorder picture number
        FieldSpec::new(4, "DEVICE", None),     // LOKI device name
        FieldSpec::new(5, "LOKI", None),       // LOKI serial
        FieldSpec::new(6, "FW_REV", None),     // firmware version
        FieldSpec::new(7, "SW_REV", None),     // software version
        FieldSpec::new(8, "CRUISE", None),     // cruise name
        FieldSpec::new(9, "STATION", None),    // station
        FieldSpec::new(10, "STATION_NR", None), // station number
        FieldSpec::new(11, "HAUL", None),      // haul
        FieldSpec::new(12, "USER", None),      // investigator
        FieldSpec::new(13, "SHIP", None),      // ship name
        FieldSpec::new(14, "SHIP_PORT", None), // port of registry
        FieldSpec::new(15, "SHIP_STAT", None), // state of registry
        FieldSpec::new(16, "SHIP_AFF", None),  // ship affiliation
        FieldSpec::new(17, "GPS_SRC", None),   // 0 = no GPS, 1 = fixed, 2 = external
        FieldSpec::new(18, "FIX_LON", Some(LocaleFloat)), // fixed longitude, +E -W
        FieldSpec::new(19, "FIX_LAT", Some(LocaleFloat)), // fixed latitude, +N -S
        FieldSpec::new(20, "TEMP_INDEX", None), // temperature sensor index
        FieldSpec::new(61, "ERROR", None),     // error message
        FieldSpec::new(62, "WAKEUP", None),    // wake-up controller message
        FieldSpec::new(63, "STOP_DATE", Some(Date)), // stop date, UTC
        FieldSpec::new(64, "STOP_TIME", Some(Time)), // stop time, UTC
    ],
);
