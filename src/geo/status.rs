//! Provider status codes and failure classification

use serde::{Deserialize, Serialize};

/// Why a geocode call produced `success = false`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeocodeFailure {
    /// Empty or blank address; nothing was sent
    Input,
    /// No API key configured; nothing was sent
    Config,
    /// Network failure, non-2xx HTTP status or unreadable body
    Transport,
    /// The provider answered but reported a failure status
    Provider,
}

/// Status field of a Google Geocoding API response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    Other(String),
}

impl ProviderStatus {
    /// Parse the raw status string
    pub fn from_code(code: &str) -> Self {
        match code {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "UNKNOWN_ERROR" => Self::UnknownError,
            other => Self::Other(other.to_string()),
        }
    }

    /// The raw status string
    pub fn code(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other(code) => code,
        }
    }

    /// Operator-facing message shown for a failed lookup
    pub fn message(&self) -> String {
        match self {
            Self::Ok => "Thành công".to_string(),
            Self::ZeroResults => {
                "Không tìm thấy địa chỉ. Vui lòng kiểm tra lại địa chỉ đã nhập.".to_string()
            }
            Self::OverQueryLimit => {
                "Đã vượt quá giới hạn truy vấn. Vui lòng thử lại sau.".to_string()
            }
            Self::RequestDenied => {
                "Yêu cầu bị từ chối. Vui lòng kiểm tra API key.".to_string()
            }
            Self::InvalidRequest => {
                "Yêu cầu không hợp lệ. Vui lòng kiểm tra địa chỉ đã nhập.".to_string()
            }
            Self::UnknownError => {
                "Lỗi máy chủ không xác định. Vui lòng thử lại.".to_string()
            }
            Self::Other(code) => format!("Lỗi geocoding: {}", code),
        }
    }
}

impl std::fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
