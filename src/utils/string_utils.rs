//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Sofia  ".to_string())), Some("Sofia".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열을 최대 `max_chars` 글자(char)까지 자릅니다.
///
/// 바이트가 아닌 문자 단위로 자르므로 멀티바이트 문자 중간에서 끊기지 않습니다.
/// 진단 응답에 에러 메시지를 짧게 담을 때 사용합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::truncate_chars;
///
/// assert_eq!(truncate_chars("connection refused", 10), "connection");
/// ```
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
