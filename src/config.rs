/// 配置管理模組
///
/// 負責加載、驗證和管理日誌與分析配置。
/// 依 `QUANT_ENV` 選擇開發或生產環境的配置文件，環境變數可覆寫文件內容。
pub mod loader;
pub mod manager;
pub mod types;
pub mod validation;

// 重新導出常用組件
pub use loader::{build_sources, Environment};
pub use manager::{get_config, init_config};
pub use types::*;
pub use validation::{ValidationError, ValidationUtils, Validator};
