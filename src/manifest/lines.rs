//! Rendering manifest lines for each target platform convention.

/// Path separator convention targeted by one manifest variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathVariant {
  /// Backslash separators, prefix rewritten to `..\`.
  Windows,
  /// Forward-slash separators, prefix rewritten to `../`.
  Linux,
}

impl PathVariant {
  /// Tag embedded in the manifest file name.
  pub fn tag(self) -> &'static str {
    match self {
      Self::Windows => "windows",
      Self::Linux => "linux",
    }
  }

  /// Relative marker substituted for the stripped prefix.
  pub fn relative_marker(self) -> &'static str {
    match self {
      Self::Windows => "..\\",
      Self::Linux => "../",
    }
  }

  /// Render one manifest line for this variant.
  ///
  /// Any occurrence of `strip_prefix` is replaced by the variant's relative
  /// marker; this is a best-effort cleanup and a no-op when the prefix is
  /// unset or absent from the line. The linux variant additionally replaces
  /// every backslash with a forward slash. The windows variant leaves
  /// separators untouched, so forward slashes from a unix host survive
  /// as-is.
  pub fn render_line(self, line: &str, strip_prefix: Option<&str>) -> String {
    let rendered = match strip_prefix {
      Some(prefix) if !prefix.is_empty() => line.replace(prefix, self.relative_marker()),
      _ => line.to_string(),
    };

    match self {
      Self::Windows => rendered,
      Self::Linux => rendered.replace('\\', "/"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_lines_without_prefix_unchanged() {
    let line = r"C:\data\cats\Label\img001.txt C:\data\cats\img001.jpg";
    assert_eq!(PathVariant::Windows.render_line(line, None), line);
  }

  #[test]
  fn linux_variant_normalises_backslashes() {
    let line = r"C:\data\cats\Label\img001.txt C:\data\cats\img001.jpg";
    assert_eq!(
      PathVariant::Linux.render_line(line, None),
      "C:/data/cats/Label/img001.txt C:/data/cats/img001.jpg"
    );
  }

  #[test]
  fn substitutes_prefix_with_variant_marker() {
    let line = r"C:\dev\project\cats\Label\img001.txt C:\dev\project\cats\img001.jpg";
    let prefix = Some(r"C:\dev\project\");

    assert_eq!(
      PathVariant::Windows.render_line(line, prefix),
      r"..\cats\Label\img001.txt ..\cats\img001.jpg"
    );
    assert_eq!(
      PathVariant::Linux.render_line(line, prefix),
      "../cats/Label/img001.txt ../cats/img001.jpg"
    );
  }

  #[test]
  fn substitutes_unix_style_prefix() {
    let line = "/home/dev/project/cats/Label/img001.txt /home/dev/project/cats/img001.jpg";
    let prefix = Some("/home/dev/project/");

    assert_eq!(
      PathVariant::Linux.render_line(line, prefix),
      "../cats/Label/img001.txt ../cats/img001.jpg"
    );
  }

  #[test]
  fn missing_prefix_is_a_no_op() {
    let line = "/mnt/other/cats/Label/img001.txt /mnt/other/cats/img001.jpg";
    assert_eq!(
      PathVariant::Linux.render_line(line, Some("/home/dev/project/")),
      line
    );
  }

  #[test]
  fn empty_prefix_is_ignored() {
    let line = "a b";
    assert_eq!(PathVariant::Windows.render_line(line, Some("")), "a b");
  }
}
