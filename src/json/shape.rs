use serde_json::Value;

/// Runtime variant of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
	/// `null`.
	Null,
	/// `true` or `false`.
	Bool,
	/// Any number.
	Number,
	/// String.
	String,
	/// Ordered sequence.
	Array,
	/// Key-value mapping.
	Object,
}

impl Shape {
	/// Shape of `value`.
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(_) => Self::Bool,
			Value::Number(_) => Self::Number,
			Value::String(_) => Self::String,
			Value::Array(_) => Self::Array,
			Value::Object(_) => Self::Object,
		}
	}

	/// Lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl std::fmt::Display for Shape {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
