// ─────────────────────────────────────────────────────────────────────
// Calco — PyO3 FFI Bindings
// (C) 2026 The Calco Authors. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied; PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python extension module `calco`.
//!
//! Every registered operation is exposed as a module-level function of
//! the same name taking positional arguments only, plus a generic
//! `call(name, *args)`, `operations()`, `describe(name)` and an `Engine`
//! class carrying its own coercion config.
//!
//! # FFI Contract
//!
//! - The registry is built once, during module initialisation, and is
//!   read-only afterwards.
//! - Python values are marshalled into `HostValue`s here; coercion to
//!   `f64` happens in the dispatcher, never in a kernel.
//! - Call-contract failures raise `CallContractError` (a `TypeError`)
//!   or `UnknownOperationError` (a `LookupError`). Numeric outcomes,
//!   NaN and ±inf included, are always returned as `float`.
//!
//! Install: `pip install -e crates/calco-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! import calco
//!
//! calco.add(123.456, 654.321)          # 777.777
//! calco.divide(1.0, 0.0)               # inf
//! calco.call("gamma_function", 5)      # 24.0
//! calco.describe("arcsine")["domain"]  # '-1 <= x <= 1'
//! ```

use std::sync::OnceLock;

use pyo3::create_exception;
use pyo3::exceptions::{PyLookupError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyList, PyString, PyTuple};

use calco_core::{Dispatcher, FunctionDescriptor, Kernel, Registry};
use calco_types::{CalcoError, CalcoResult, CallOutcome, DispatchConfig, Expect, HostValue};

create_exception!(
    calco,
    CallContractError,
    PyTypeError,
    "Wrong argument count or non-numeric argument."
);
create_exception!(
    calco,
    UnknownOperationError,
    PyLookupError,
    "No operation is registered under this name."
);

/// Module-wide dispatcher. Built at most once; a failed build is kept
/// and reported to every caller.
static DISPATCHER: OnceLock<CalcoResult<Dispatcher>> = OnceLock::new();

fn dispatcher() -> PyResult<&'static Dispatcher> {
    DISPATCHER
        .get_or_init(Dispatcher::standard)
        .as_ref()
        .map_err(|err| to_py_err(err.clone()))
}

// ─── Marshalling ────────────────────────────────────────────────────

fn to_py_err(err: CalcoError) -> PyErr {
    match &err {
        CalcoError::UnknownOperation { .. } => UnknownOperationError::new_err(err.to_string()),
        CalcoError::Arity { .. } | CalcoError::NonNumeric { .. } => {
            CallContractError::new_err(err.to_string())
        }
        CalcoError::DuplicateOperation { .. } | CalcoError::Config(_) => {
            PyValueError::new_err(err.to_string())
        }
    }
}

fn type_name(obj: &Bound<'_, PyAny>) -> String {
    obj.get_type()
        .name()
        .map(|n| n.to_string())
        .unwrap_or_else(|_| "object".to_string())
}

/// Python object → host value. `bool` is checked before `int` because
/// it is a subclass of it.
fn to_host_value(obj: &Bound<'_, PyAny>) -> HostValue {
    if let Ok(b) = obj.downcast::<PyBool>() {
        return HostValue::Bool(b.is_true());
    }
    if let Ok(f) = obj.downcast::<PyFloat>() {
        return HostValue::Float(f.value());
    }
    if obj.is_instance_of::<PyInt>() {
        if let Ok(i) = obj.extract::<i64>() {
            return HostValue::Int(i);
        }
        // Beyond i64: keep it if it still fits a double.
        return match obj.extract::<f64>() {
            Ok(v) => HostValue::Float(v),
            Err(_) => HostValue::Unsupported("int too large to convert to float".to_string()),
        };
    }
    if let Ok(s) = obj.downcast::<PyString>() {
        return match s.to_str() {
            Ok(s) => HostValue::Str(s.to_string()),
            Err(_) => HostValue::Unsupported("str".to_string()),
        };
    }
    if obj.hasattr("__float__").unwrap_or(false) {
        if let Ok(v) = obj.extract::<f64>() {
            return HostValue::Float(v);
        }
    }
    HostValue::Unsupported(type_name(obj))
}

fn outcome_to_py(py: Python<'_>, outcome: CallOutcome) -> PyObject {
    match outcome {
        CallOutcome::Number(v) => PyFloat::new(py, v).into_any().unbind(),
        CallOutcome::Flag(b) => PyBool::new(py, b).to_owned().into_any().unbind(),
    }
}

fn call_with(
    dispatcher: &Dispatcher,
    py: Python<'_>,
    name: &str,
    args: &Bound<'_, PyTuple>,
) -> PyResult<PyObject> {
    let host: Vec<HostValue> = args.iter().map(|a| to_host_value(&a)).collect();
    let outcome = dispatcher.call(name, &host).map_err(to_py_err)?;
    Ok(outcome_to_py(py, outcome))
}

fn describe_with<'py>(
    registry: &Registry,
    py: Python<'py>,
    name: &str,
) -> PyResult<Bound<'py, PyDict>> {
    let descriptor = registry.get(name).ok_or_else(|| {
        to_py_err(CalcoError::UnknownOperation {
            name: name.to_string(),
        })
    })?;
    descriptor_to_dict(py, descriptor)
}

fn descriptor_to_dict<'py>(
    py: Python<'py>,
    d: &FunctionDescriptor,
) -> PyResult<Bound<'py, PyDict>> {
    let returns = match d.kernel {
        Kernel::Predicate(_) => "bool",
        _ => "float",
    };
    let dict = PyDict::new(py);
    dict.set_item("name", d.name)?;
    dict.set_item("arity", d.arity().count())?;
    dict.set_item("category", d.category.as_str())?;
    dict.set_item("domain", d.domain.to_string())?;
    dict.set_item("returns", returns)?;
    dict.set_item("doc", d.doc)?;
    let cases = PyList::empty(py);
    for sc in d.special_cases {
        let case = PyDict::new(py);
        case.set_item("args", sc.args.to_vec())?;
        match sc.expect {
            Expect::Exact(v) => case.set_item("expect", v)?,
            Expect::Nan => case.set_item("expect", f64::NAN)?,
            Expect::Flag(b) => case.set_item("expect", b)?,
        }
        cases.append(case)?;
    }
    dict.set_item("special_cases", cases)?;
    Ok(dict)
}

// ─── Per-operation functions ────────────────────────────────────────

macro_rules! bind_operations {
    ($($name:ident),* $(,)?) => {
        $(
            #[pyfunction]
            #[pyo3(signature = (*args))]
            fn $name(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<PyObject> {
                call_with(dispatcher()?, py, stringify!($name), args)
            }
        )*

        /// Names exported as module-level functions.
        const BOUND_NAMES: &[&str] = &[$(stringify!($name)),*];

        fn add_operations(m: &Bound<'_, PyModule>) -> PyResult<()> {
            $( m.add_function(wrap_pyfunction!($name, m)?)?; )*
            Ok(())
        }
    };
}

bind_operations!(
    // Arithmetic
    add,
    subtract,
    multiply,
    divide,
    power,
    square_root,
    cube_root,
    absolute_value,
    float_modulo,
    hypotenuse,
    positive_difference,
    copy_sign_double,
    // Rounding
    floor_val,
    ceil_val,
    round_val,
    nearbyint_val,
    truncate_val,
    // Logarithms and exponentials
    natural_log,
    log_base10,
    log_base2,
    log_custom_base,
    exponential,
    exponential_base2,
    exponential_minus_1,
    // Trigonometric and hyperbolic
    sine,
    cosine,
    tangent,
    arcsine,
    arccosine,
    arctangent,
    arctangent2,
    hyperbolic_sine,
    hyperbolic_cosine,
    hyperbolic_tangent,
    inverse_hyperbolic_sine,
    inverse_hyperbolic_cosine,
    inverse_hyperbolic_tangent,
    // Special functions and utilities
    gamma_function,
    log_gamma_function,
    error_function,
    complementary_error_function,
    next_after_double,
    fused_multiply_add,
    degrees_to_radians,
    radians_to_degrees,
    get_pi,
    get_e,
    is_nan,
    is_infinity,
);

// ─── Generic entry points ───────────────────────────────────────────

/// Call an operation by name: `call("power", 2, 10)`.
#[pyfunction]
#[pyo3(signature = (name, *args))]
fn call(py: Python<'_>, name: &str, args: &Bound<'_, PyTuple>) -> PyResult<PyObject> {
    call_with(dispatcher()?, py, name, args)
}

/// Sorted list of every registered operation name.
#[pyfunction]
fn operations() -> PyResult<Vec<&'static str>> {
    Ok(dispatcher()?.registry().names())
}

/// Metadata for one operation: name, arity, category, domain, returns,
/// doc and the `special_cases` table of `{"args": [...], "expect": ...}`.
#[pyfunction]
fn describe<'py>(py: Python<'py>, name: &str) -> PyResult<Bound<'py, PyDict>> {
    describe_with(dispatcher()?.registry(), py, name)
}

// ─── PyEngine ───────────────────────────────────────────────────────

/// Independent dispatcher with its own coercion config.
///
/// `Engine('{"coerce_strings": false}')` refuses numeric strings that
/// the module-level functions would accept.
#[pyclass(name = "Engine", frozen)]
struct PyEngine {
    inner: Dispatcher,
}

#[pymethods]
impl PyEngine {
    #[new]
    #[pyo3(signature = (config_json = None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => DispatchConfig::from_json(json).map_err(to_py_err)?,
            None => DispatchConfig::default(),
        };
        let registry = Registry::standard().map_err(to_py_err)?;
        let inner = Dispatcher::new(registry, config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[pyo3(signature = (name, *args))]
    fn call(&self, py: Python<'_>, name: &str, args: &Bound<'_, PyTuple>) -> PyResult<PyObject> {
        call_with(&self.inner, py, name, args)
    }

    fn operations(&self) -> Vec<&'static str> {
        self.inner.registry().names()
    }

    fn describe<'py>(&self, py: Python<'py>, name: &str) -> PyResult<Bound<'py, PyDict>> {
        describe_with(self.inner.registry(), py, name)
    }

    #[getter]
    fn config<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let config = self.inner.config();
        let dict = PyDict::new(py);
        dict.set_item("coerce_strings", config.coerce_strings)?;
        dict.set_item("coerce_bools", config.coerce_bools)?;
        dict.set_item("max_numeric_str_len", config.max_numeric_str_len)?;
        Ok(dict)
    }

    fn __len__(&self) -> usize {
        self.inner.registry().len()
    }

    fn __contains__(&self, name: &str) -> bool {
        self.inner.registry().contains(name)
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "Engine(operations={}, coerce_strings={}, coerce_bools={})",
            self.inner.registry().len(),
            config.coerce_strings,
            config.coerce_bools
        )
    }
}

// ─── Module ─────────────────────────────────────────────────────────

/// `calco`: double-precision math kernels addressed by name.
///
/// - one function per operation (`add`, `sine`, `gamma_function`, ...)
/// - `call(name, *args)`, `operations()`, `describe(name)`
/// - `Engine`: dispatcher with its own coercion config
/// - `CallContractError`, `UnknownOperationError`
#[pymodule]
fn calco(m: &Bound<'_, PyModule>) -> PyResult<()> {
    dispatcher()?;
    log::debug!("calco module initialised with {} bound operations", BOUND_NAMES.len());

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("CallContractError", m.py().get_type::<CallContractError>())?;
    m.add("UnknownOperationError", m.py().get_type::<UnknownOperationError>())?;

    add_operations(m)?;
    m.add_function(wrap_pyfunction!(call, m)?)?;
    m.add_function(wrap_pyfunction!(operations, m)?)?;
    m.add_function(wrap_pyfunction!(describe, m)?)?;
    m.add_class::<PyEngine>()?;
    Ok(())
}
