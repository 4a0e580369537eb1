// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库，页面文案集中在 locales/en.yml
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 当前语言（页面 lang 属性）
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 翻译消息
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息，替换 %{name} 占位符
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(key), |text, (name, value)| {
        text.replace(&format!("%{{{}}}", name), value)
    })
}
