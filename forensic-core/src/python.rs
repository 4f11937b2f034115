//! Python bindings for the process-wide logger.
//!
//! Built with `--features python`; the module is importable as
//! `forensic_core` from the shipped `forensic_core.so`.

use chrono::{DateTime, TimeZone, Utc};
use pyo3::prelude::*;
use pyo3::types::PyAny;

use crate::scope::ScopeEnd;

fn start_from_epoch_secs(start: Option<f64>) -> DateTime<Utc> {
    match start {
        Some(secs) => Utc.timestamp_nanos((secs * 1e9) as i64),
        None => crate::process_start(),
    }
}

/// Log a message.
///
/// `start` is a `time.time()` value; elapsed time is measured from process
/// start when it is omitted.
#[pyfunction]
#[pyo3(signature = (message, level="INFO".to_string(), start=None))]
fn forensic_log(message: &str, level: String, start: Option<f64>) -> PyResult<()> {
    crate::init_logger();
    crate::forensic_log(message, start_from_epoch_secs(start), &level);
    Ok(())
}

/// Log a WARN record if `condition` is false.
#[pyfunction]
fn forensic_check(condition: bool, message: &str) -> PyResult<bool> {
    crate::init_logger();
    Ok(crate::forensic_check(condition, message))
}

/// Call `func` between start and end records.
///
/// An exception raised by `func` propagates after the end record.
#[pyfunction]
fn forensic_scope(py: Python<'_>, name: String, func: &PyAny) -> PyResult<PyObject> {
    crate::init_logger();
    let _guard = crate::start_scope(name).guard();
    func.call0().map(|value| value.into_py(py))
}

/// Acquire/release scope, also usable as a context manager.
#[pyclass(name = "ForensicScope")]
struct ScopeHandle {
    end: Option<ScopeEnd<'static>>,
}

#[pymethods]
impl ScopeHandle {
    /// Emit the end record. Later calls do nothing.
    fn end(&mut self) {
        if let Some(end) = self.end.take() {
            end.end();
        }
    }

    fn __enter__(slf: PyRefMut<'_, Self>) -> PyRefMut<'_, Self> {
        slf
    }

    fn __exit__(
        &mut self,
        _exc_type: &PyAny,
        _exc_value: &PyAny,
        _traceback: &PyAny,
    ) -> bool {
        self.end();
        false
    }
}

/// Emit the start record and return the handle that ends the scope.
#[pyfunction]
fn start_scope(name: String) -> PyResult<ScopeHandle> {
    crate::init_logger();
    let end: ScopeEnd<'static> = crate::start_scope(name);
    Ok(ScopeHandle { end: Some(end) })
}

#[pyfunction]
fn set_enabled(enabled: bool) -> PyResult<()> {
    crate::init_logger();
    crate::set_enabled(enabled);
    Ok(())
}

#[pyfunction]
fn is_enabled() -> PyResult<bool> {
    Ok(crate::is_enabled())
}

#[pyfunction]
fn correlation_id() -> PyResult<String> {
    Ok(crate::correlation_id().to_string())
}

/// Python module definition
#[pymodule]
fn forensic_core(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    crate::init();
    m.add_function(wrap_pyfunction!(forensic_log, m)?)?;
    m.add_function(wrap_pyfunction!(forensic_check, m)?)?;
    m.add_function(wrap_pyfunction!(forensic_scope, m)?)?;
    m.add_function(wrap_pyfunction!(start_scope, m)?)?;
    m.add_function(wrap_pyfunction!(set_enabled, m)?)?;
    m.add_function(wrap_pyfunction!(is_enabled, m)?)?;
    m.add_function(wrap_pyfunction!(correlation_id, m)?)?;
    m.add_class::<ScopeHandle>()?;
    Ok(())
}
