//! Default values for configuration fields.

/// Default directory holding the model artifacts.
pub const DEFAULT_MODEL_DIR: &str = "models";

/// Default cost regressor file name.
pub const DEFAULT_COST_MODEL_FILE: &str = "cost_model.onnx";

/// Default delay classifier file name.
pub const DEFAULT_DELAY_MODEL_FILE: &str = "delay_model.onnx";

/// Default feature column list file name.
pub const DEFAULT_COLUMNS_FILE: &str = "feature_columns.json";
