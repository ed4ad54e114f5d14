use leadkit_contact::spec::SpecContactReport;
use leadkit_contact::{
    ContactError, SpecContactProcessOptions, format_success_message, process_with_options,
    validate_file_extension,
};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

const N_BRIDGE_ABI_VERSION: u64 = 1;
const C_BRIDGE_CONTRACT_VERSION: &str = "leadkit.contact.process.v1";

fn map_contact_error(exception: ContactError) -> PyErr {
    let c_message = exception.to_user_message();
    match exception {
        ContactError::InvalidFileType { .. } => PyValueError::new_err(c_message),
        ContactError::HeaderRead(_) | ContactError::Processing(_) => {
            PyRuntimeError::new_err(c_message)
        }
    }
}

fn create_report_dict<'py>(
    py: Python<'py>,
    report: &SpecContactReport,
) -> PyResult<Bound<'py, PyDict>> {
    let dict_report = PyDict::new(py);
    for (c_key, n_value) in report.to_dict() {
        dict_report.set_item(c_key, n_value)?;
    }
    dict_report.set_item("warnings", report.warnings.clone())?;
    Ok(dict_report)
}

#[pyfunction(name = "validate_file_extension")]
fn validate_file_extension_py(file_name: &str) -> bool {
    validate_file_extension(file_name)
}

#[pyfunction(name = "format_success_message")]
fn format_success_message_py(file_name: &str) -> String {
    format_success_message(file_name)
}

#[pyfunction(name = "process_excel")]
fn process_excel_py<'py>(
    py: Python<'py>,
    buffer: &[u8],
    file_name: &str,
) -> PyResult<(Bound<'py, PyBytes>, String)> {
    let export = py
        .allow_threads(|| {
            process_with_options(buffer, file_name, &SpecContactProcessOptions::default())
        })
        .map_err(map_contact_error)?;
    Ok((PyBytes::new(py, &export.v_bytes), export.file_name))
}

#[pyfunction(name = "process_excel_with_report")]
fn process_excel_with_report_py<'py>(
    py: Python<'py>,
    buffer: &[u8],
    file_name: &str,
) -> PyResult<(Bound<'py, PyBytes>, String, Bound<'py, PyDict>)> {
    let export = py
        .allow_threads(|| {
            process_with_options(buffer, file_name, &SpecContactProcessOptions::default())
        })
        .map_err(map_contact_error)?;
    let dict_report = create_report_dict(py, &export.report)?;
    Ok((
        PyBytes::new(py, &export.v_bytes),
        export.file_name,
        dict_report,
    ))
}

#[pymodule]
fn _leadkit_contact_rs(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(validate_file_extension_py, module)?)?;
    module.add_function(wrap_pyfunction!(format_success_message_py, module)?)?;
    module.add_function(wrap_pyfunction!(process_excel_py, module)?)?;
    module.add_function(wrap_pyfunction!(process_excel_with_report_py, module)?)?;
    module.add("__bridge_abi__", N_BRIDGE_ABI_VERSION)?;
    module.add("__bridge_contract__", C_BRIDGE_CONTRACT_VERSION)?;
    Ok(())
}
