use std::ops::Bound;
use std::path::PathBuf;
use std::str::FromStr;

use jsoninterp::json::{Array, FromJson, Object, Shape, convert, interpret, interpret_root, interpret_with};
use serde::Serialize;
use serde_json::{Number, Value};

use crate::cmd::error::CmdError;
use crate::cmd::util::load_document;

/// Requested target type for an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShapeArg {
	Any,
	Null,
	Bool,
	Uint,
	Int,
	Number,
	String,
	Array,
	Object,
}

impl ShapeArg {
	fn is_numeric(self) -> bool {
		matches!(self, Self::Uint | Self::Int | Self::Number)
	}
}

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub key: String,
	#[arg(long = "as", value_enum, default_value_t = ShapeArg::Any)]
	pub shape: ShapeArg,
	#[arg(long)]
	pub min: Option<String>,
	#[arg(long)]
	pub max: Option<String>,
	#[arg(long)]
	pub url: bool,
	#[arg(long)]
	pub json: bool,
}

/// Validated extraction request.
#[derive(Debug, Clone)]
pub struct GetOptions {
	/// Key looked up in the root object.
	pub key: String,
	/// Requested target type.
	pub shape: ShapeArg,
	/// Inclusive lower bound for numeric shapes.
	pub min: Option<String>,
	/// Inclusive upper bound for numeric shapes.
	pub max: Option<String>,
	/// Convert a string field into an absolute URL.
	pub url: bool,
}

impl GetOptions {
	/// Reject flag combinations that have no meaning for the requested shape.
	pub fn new(key: String, shape: ShapeArg, min: Option<String>, max: Option<String>, url: bool) -> Result<Self, CmdError> {
		if (min.is_some() || max.is_some()) && !shape.is_numeric() {
			return Err(CmdError::usage("--min/--max require --as uint, int, or number"));
		}
		if url && !matches!(shape, ShapeArg::Any | ShapeArg::String) {
			return Err(CmdError::usage("--url requires --as string"));
		}

		Ok(Self { key, shape, min, max, url })
	}
}

#[derive(Serialize)]
struct GetReport<'a> {
	key: &'a str,
	shape: &'static str,
	value: Value,
}

/// Extract one field from the root object and print it.
pub fn run(args: Args) -> Result<(), CmdError> {
	let Args {
		path,
		key,
		shape,
		min,
		max,
		url,
		json,
	} = args;

	let options = GetOptions::new(key, shape, min, max, url)?;
	let document = load_document(&path)?;
	let root = interpret_root::<&Object>(&document)?;

	let value = extract(root, &options).inspect_err(|err| {
		if let CmdError::Interpret(err) = err {
			tracing::warn!(key = %options.key, kind = err.kind().as_str(), "extraction failed");
		}
	})?;

	if json {
		let report = GetReport {
			key: &options.key,
			shape: Shape::of(&value).as_str(),
			value,
		};
		println!("{}", serde_json::to_string(&report).map_err(CmdError::Encode)?);
	} else {
		println!("{value}");
	}

	Ok(())
}

/// Run the extraction described by `options` against `root`.
pub(crate) fn extract(root: &Object, options: &GetOptions) -> Result<Value, CmdError> {
	let key = options.key.as_str();

	if options.url {
		let reference = interpret_with(key, root, convert::url_reference)?;
		return Ok(Value::String(reference.to_string()));
	}

	let value = match options.shape {
		ShapeArg::Any => interpret::<&Value>(key, root)?.clone(),
		ShapeArg::Null => {
			interpret::<()>(key, root)?;
			Value::Null
		}
		ShapeArg::Bool => Value::Bool(interpret(key, root)?),
		ShapeArg::Uint => Value::from(bounded::<u64>(key, root, options)?),
		ShapeArg::Int => Value::from(bounded::<i64>(key, root, options)?),
		ShapeArg::Number => Value::Number(bounded_number(key, root, options)?.clone()),
		ShapeArg::String => Value::from(interpret::<&str>(key, root)?),
		ShapeArg::Array => Value::Array(interpret::<&Array>(key, root)?.clone()),
		ShapeArg::Object => Value::Object(interpret::<&Object>(key, root)?.clone()),
	};

	Ok(value)
}

fn bounded<'a, T>(key: &str, root: &'a Object, options: &GetOptions) -> Result<T, CmdError>
where
	T: FromJson<'a> + FromStr + PartialOrd,
{
	let lower = parse_bound::<T>("--min", options.min.as_deref())?;
	let upper = parse_bound::<T>("--max", options.max.as_deref())?;
	Ok(interpret_with::<T, T, _>(key, root, convert::in_range((lower, upper)))?)
}

/// Numbers are range-checked through `f64` but returned as stored.
fn bounded_number<'a>(key: &str, root: &'a Object, options: &GetOptions) -> Result<&'a Number, CmdError> {
	let lower = parse_bound::<f64>("--min", options.min.as_deref())?;
	let upper = parse_bound::<f64>("--max", options.max.as_deref())?;
	let within = convert::in_range((lower, upper));
	Ok(interpret_with(key, root, |number: &'a Number| within(number.as_f64()?).map(|_| number))?)
}

fn parse_bound<T: FromStr + PartialOrd>(flag: &str, raw: Option<&str>) -> Result<Bound<T>, CmdError> {
	let Some(raw) = raw else {
		return Ok(Bound::Unbounded);
	};

	let Some(bound) = convert::parse::<T>(raw) else {
		return Err(CmdError::usage(format!("{flag} value {raw:?} does not fit the requested shape")));
	};
	// NaN is unordered, even with itself.
	if bound.partial_cmp(&bound).is_none() {
		return Err(CmdError::usage(format!("{flag} value {raw:?} is not comparable")));
	}

	Ok(Bound::Included(bound))
}
