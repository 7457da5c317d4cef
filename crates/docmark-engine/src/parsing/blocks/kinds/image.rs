use crate::parsing::inline::kinds::Link;

/// A line holding nothing but `![alt](url)`.
pub struct StandaloneImage;

impl StandaloneImage {
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        let t = line.trim();
        let (alt, url, len) = Link::image_at(t)?;
        (len == t.len()).then_some((alt, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_line_image() {
        assert_eq!(
            StandaloneImage::parse("  ![diagram](img/a.png) "),
            Some(("diagram", "img/a.png"))
        );
        assert_eq!(StandaloneImage::parse("![](x.png)"), Some(("", "x.png")));
    }

    #[test]
    fn image_with_surrounding_text_is_not_standalone() {
        assert_eq!(StandaloneImage::parse("see ![a](b.png)"), None);
        assert_eq!(StandaloneImage::parse("![a](b.png) caption"), None);
    }
}
