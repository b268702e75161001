//! Assembles shapes into a complete SVG document.

use crate::random::{Color, RandomSource};
use crate::shapes::{Canvas, Shape, ShapeKind};
use std::fmt;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// One generated SVG file: a background fill plus the random shapes on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub canvas: Canvas,
    pub background: Color,
    pub shapes: Vec<Shape>,
}

impl Document {
    /// Draws `shape_count` shapes, each of a uniformly chosen kind.
    ///
    /// A `shape_count` of zero yields a document with only the background.
    pub fn compose(canvas: Canvas, shape_count: u32, rng: &mut impl RandomSource) -> Self {
        let mut shapes = Vec::with_capacity(shape_count as usize);
        for _ in 0..shape_count {
            let kind = ShapeKind::choose(rng);
            tracing::debug!(%kind, "adding shape");
            shapes.push(kind.generate(canvas, rng));
        }

        Self {
            canvas,
            background: rng.color(),
            shapes,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Canvas { width, height } = self.canvas;
        writeln!(
            f,
            r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="{SVG_NAMESPACE}">"#
        )?;
        writeln!(
            f,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            self.background
        )?;
        for shape in &self.shapes {
            writeln!(f, "  {shape}")?;
        }
        writeln!(f, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::tests::Scripted;
    use crate::random::RngSource;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn empty_document_has_only_background() {
        let mut rng = Scripted::new(&[0.0]);
        let doc = Document::compose(Canvas::new(120, 80), 0, &mut rng);
        assert!(doc.shapes.is_empty());
        assert_eq!(
            doc.to_string(),
            concat!(
                r#"<svg width="120" height="80" viewBox="0 0 120 80" xmlns="http://www.w3.org/2000/svg">"#,
                "\n",
                r##"  <rect width="100%" height="100%" fill="#000000"/>"##,
                "\n</svg>\n",
            )
        );
    }

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(40)]
    fn document_has_one_element_per_shape_plus_background(#[case] count: u32) {
        let mut rng = RngSource::seeded(u64::from(count));
        let doc = Document::compose(Canvas::new(300, 200), count, &mut rng);
        assert_eq!(doc.shapes.len(), count as usize);

        let rendered = doc.to_string();
        let elements = rendered
            .lines()
            .filter(|line| {
                let line = line.trim_start();
                ShapeKind::ALL
                    .iter()
                    .any(|kind| line.starts_with(&format!("<{kind} ")))
            })
            .count();
        assert_eq!(elements, count as usize + 1);
        assert!(rendered.starts_with("<svg "));
        assert!(rendered.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn same_seed_gives_same_document() {
        let canvas = Canvas::new(500, 500);
        let a = Document::compose(canvas, 7, &mut RngSource::seeded(99));
        let b = Document::compose(canvas, 7, &mut RngSource::seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn every_kind_eventually_appears() {
        let mut rng = RngSource::seeded(2024);
        let doc = Document::compose(Canvas::new(500, 500), 200, &mut rng);
        for kind in ShapeKind::ALL {
            assert!(doc.shapes.iter().any(|s| s.kind() == kind), "{kind} never chosen");
        }
    }
}
