use chrono::NaiveDateTime;
use pn_content::{ContentSource, FetchError};
use pn_core::{dates, Article};
use tracing::{debug, warn};

const DEFAULT_SOURCE: &str = "الجزيرة نت";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading(String),
    Subheading(String),
    Paragraph(Vec<Span>),
    Rule(char),
    Blank,
    Footer(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub blocks: Vec<Block>,
}

impl Report {
    fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    fn text(&mut self, text: impl Into<String>) {
        self.push(Block::Paragraph(vec![Span::plain(text)]));
    }
}

/// `palestine_news_2024_01_15.docx` for `2024-01-15`.
pub fn filename(date: &str) -> String {
    format!("palestine_news_{}.docx", date.replace('-', "_"))
}

/// Lays out the report for `date`. With `content` set, each article's full
/// body is fetched and embedded; fetch failures are written into the report
/// instead of aborting it.
pub async fn build_report(
    date: &str,
    articles: &[&Article],
    content: Option<&dyn ContentSource>,
    generated_at: NaiveDateTime,
) -> Report {
    let mut report = Report::default();
    report.push(Block::Title(format!(
        "أخبار فلسطين - {}",
        dates::format_arabic(date)
    )));
    report.text(format!("عدد المقالات: {} مقال", articles.len()));
    report.push(Block::Rule('='));

    for (index, article) in articles.iter().enumerate() {
        let title = if article.title.is_empty() {
            "بدون عنوان"
        } else {
            article.title.as_str()
        };
        report.push(Block::Heading(format!("{}. {}", index + 1, title)));
        report.push(Block::Paragraph(metadata(article)));

        if !article.excerpt.is_empty() {
            report.push(Block::Subheading("ملخص المقال:".to_string()));
            report.text(article.excerpt.clone());
        }

        match content {
            Some(source) if !article.link.is_empty() => {
                report.push(Block::Subheading("المحتوى الكامل:".to_string()));
                full_text(&mut report, source, article).await;
            }
            _ => {
                let link = if article.link.is_empty() {
                    "غير متوفر"
                } else {
                    article.link.as_str()
                };
                report.push(Block::Paragraph(vec![
                    Span::bold("رابط المقال الأصلي: "),
                    Span::plain(link),
                ]));
            }
        }

        if index + 1 < articles.len() {
            report.push(Block::Rule('-'));
            report.push(Block::Blank);
        }
    }

    report.push(Block::Blank);
    report.push(Block::Footer(format!(
        "تم إنشاء هذا التقرير في: {}",
        generated_at.format("%Y-%m-%d %H:%M")
    )));
    report
}

fn metadata(article: &Article) -> Vec<Span> {
    let date = if article.date.is_empty() {
        "غير محدد"
    } else {
        article.date.as_str()
    };
    let source = if article.source.is_empty() {
        DEFAULT_SOURCE
    } else {
        article.source.as_str()
    };
    vec![
        Span::bold("نوع المحتوى: "),
        Span::plain(article.kind.label()),
        Span::bold(" | تاريخ النشر: "),
        Span::plain(date),
        Span::bold(" | المصدر: "),
        Span::plain(source),
    ]
}

async fn full_text(report: &mut Report, source: &dyn ContentSource, article: &Article) {
    match source.fetch(&article.link).await {
        Ok(text) => {
            debug!("Embedding {} bytes of content for article {}", text.len(), article.id);
            for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
                report.text(line);
            }
        }
        Err(FetchError::NotFound) => report.text("لم يتم العثور على المحتوى الكامل"),
        Err(e) => {
            warn!("Failed to load content for article {}: {}", article.id, e);
            report.text(format!("خطأ في تحميل المحتوى: {}", e));
        }
    }
}
