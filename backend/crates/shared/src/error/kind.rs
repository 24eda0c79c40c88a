//! Error Kind
//!
//! [`ErrorKind`] tells the caller what went wrong at the coarsest level:
//! unreadable input, a missing resource, a business-rule violation, or a
//! fault on our side.

use serde::Serialize;

/// エラー種別
///
/// | 種別 | 意味 | コード |
/// |---|---|---|
/// | `BadRequest` | 入力を読み取れない（JSON 構文エラーなど） | 400 |
/// | `NotFound` | 入力ファイルなどが存在しない | 404 |
/// | `UnprocessableEntity` | 読み取れたが業務ルールに違反（Company の検証エラー） | 422 |
/// | `InternalServerError` | 呼び出し側では対処できない内部エラー | 500 |
///
/// シリアライズ時は `code()` と同じ `UNPROCESSABLE_ENTITY` 形式になります。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::UnprocessableEntity;
/// assert_eq!(kind.status_code(), 422);
/// assert_eq!(kind.code(), "UNPROCESSABLE_ENTITY");
/// assert!(kind.is_client_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    UnprocessableEntity,
    InternalServerError,
}

impl ErrorKind {
    /// 対応するステータスコード
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// 機械可読なコード（シリアライズ形式と同一）
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            ErrorKind::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// 表示用のタイトル
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }

    /// 呼び出し側が入力を直せば解消するエラーか
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        !self.is_server_error()
    }

    /// ログに残すべき内部エラーか
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, ErrorKind::InternalServerError)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorKind; 4] = [
        ErrorKind::BadRequest,
        ErrorKind::NotFound,
        ErrorKind::UnprocessableEntity,
        ErrorKind::InternalServerError,
    ];

    #[test]
    fn test_status_codes() {
        let codes: Vec<u16> = ALL.iter().map(ErrorKind::status_code).collect();
        assert_eq!(codes, [400, 404, 422, 500]);
    }

    #[test]
    fn test_only_internal_errors_are_server_side() {
        for kind in ALL {
            assert_eq!(kind.is_server_error(), kind.status_code() >= 500, "{kind}");
            assert_ne!(kind.is_client_error(), kind.is_server_error(), "{kind}");
        }
    }

    #[test]
    fn test_code_matches_serialized_form() {
        for kind in ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.code()));
        }
    }
}
