/// 行预处理与分词

/// 将每一段连续空白折叠为一个空格
///
/// 非空白字符（包括行首字符）保持不变，行尾空白也只是被折叠而不会被裁掉。
/// 制表符和 `\r` 同样视为空白，因此 CRLF 文件和制表符分隔的字段都能正常分词。
pub fn preprocess_line(raw: &str) -> String {
    let mut filtered = String::with_capacity(raw.len());
    let mut previous_was_space = false;

    for c in raw.chars() {
        if c.is_whitespace() {
            if !previous_was_space {
                filtered.push(' ');
            }
            previous_was_space = true;
        } else {
            filtered.push(c);
            previous_was_space = false;
        }
    }

    filtered
}

/// 按分隔符字符串切分
///
/// 保持顺序。分隔符不存在时结果只有一个元素；末尾的分隔符产生一个空元素。
/// `remove_empty` 为真时删除所有空元素。
///
/// ```rust
/// use wavefront_topo::geometry::parser::split_by_str;
///
/// assert_eq!(split_by_str("a//b", "/", false), vec!["a", "", "b"]);
/// assert_eq!(split_by_str("a//b", "/", true), vec!["a", "b"]);
/// ```
pub fn split_by_str<'a>(input: &'a str, separator: &str, remove_empty: bool) -> Vec<&'a str> {
    if separator.is_empty() {
        return vec![input];
    }

    input
        .split(separator)
        .filter(|token| !(remove_empty && token.is_empty()))
        .collect()
}

/// 可复用的分词器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer<'s> {
    separator: &'s str,
    remove_empty: bool,
}

impl<'s> Tokenizer<'s> {
    pub fn new(separator: &'s str, remove_empty: bool) -> Self {
        Self { separator, remove_empty }
    }

    /// 记录字段：按单个空格切分并丢弃空字段
    pub fn fields() -> Self {
        Self::new(" ", true)
    }

    /// 面顶点分量：按 `/` 切分并保留空分量
    pub fn face_components() -> Self {
        Self::new("/", false)
    }

    pub fn split<'a>(&self, input: &'a str) -> Vec<&'a str> {
        split_by_str(input, self.separator, self.remove_empty)
    }
}
