//! HTML rendering for the single-page upload form and its result lists.
//!
//! One self-contained page, styled via the Tailwind CDN. All interpolated
//! text goes through `escape_html`.

use crate::listings::InternshipRecord;

/// The two result lists produced by one processed upload.
pub struct ResultsView {
    pub internships: Vec<InternshipRecord>,
    pub job_suggestions: Vec<String>,
}

impl ResultsView {
    fn is_empty(&self) -> bool {
        self.internships.is_empty() && self.job_suggestions.is_empty()
    }
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Internship Finder</title>
    <link href="https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css" rel="stylesheet">
</head>
<body class="bg-gradient-to-r from-blue-500 to-purple-600 min-h-screen flex items-center justify-center p-4">
    <div class="container mx-auto bg-white p-8 md:p-16 shadow-2xl rounded-lg max-w-3xl">
        <h1 class="text-4xl font-bold text-center text-gray-800 mb-8">Find Internships Based on Your Resume</h1>
        <form action="/" method="POST" enctype="multipart/form-data" class="space-y-6">
            <div>
                <label for="resume" class="block text-lg font-semibold text-gray-700">Upload Your Resume (PDF)</label>
                <input type="file" name="resume" class="w-full mt-2 p-3 border border-gray-300 rounded-lg shadow-sm" required>
            </div>
            <button type="submit" class="w-full bg-gradient-to-r from-blue-600 to-purple-600 text-white font-bold py-3 rounded-lg shadow-lg">Find Internships</button>
        </form>
"#;

const PAGE_TAIL: &str = r#"    </div>
</body>
</html>
"#;

/// Renders the page. `None` renders the bare form (GET); a non-empty
/// `ResultsView` appends both result lists. Empty results render like the
/// bare form so "no matches at all" does not show two empty sections.
pub fn render_page(results: Option<&ResultsView>) -> String {
    let mut page = String::from(PAGE_HEAD);

    if let Some(results) = results.filter(|r| !r.is_empty()) {
        page.push_str(r#"        <div class="grid grid-cols-1 md:grid-cols-2 gap-10 mt-10">"#);
        page.push('\n');
        render_internships(&mut page, &results.internships);
        render_suggestions(&mut page, &results.job_suggestions);
        page.push_str("        </div>\n");
        page.push_str(r#"        <a href="/" class="mt-8 block text-center bg-gray-400 text-white font-bold py-2 rounded-lg">Try Again</a>"#);
        page.push('\n');
    }

    page.push_str(PAGE_TAIL);
    page
}

fn render_internships(page: &mut String, internships: &[InternshipRecord]) {
    page.push_str("            <div>\n");
    page.push_str(r#"                <h2 class="text-2xl font-semibold text-gray-800 text-center mb-4">Top Internship Opportunities</h2>"#);
    page.push_str("\n                <ul class=\"space-y-4\">\n");
    for record in internships {
        page.push_str(r#"                    <li class="bg-blue-500 text-white p-4 rounded-lg shadow-lg">"#);
        page.push_str("<strong class=\"text-lg\">");
        page.push_str(&escape_html(&record.title));
        page.push_str("</strong>");
        if let Some(company) = &record.company {
            page.push_str("<span class=\"block text-sm\">at ");
            page.push_str(&escape_html(company));
            page.push_str("</span>");
        }
        page.push_str("<a href=\"");
        page.push_str(&escape_html(&record.link));
        page.push_str("\" target=\"_blank\" class=\"text-blue-200 underline mt-2 block\">View Details</a>");
        page.push_str("</li>\n");
    }
    page.push_str("                </ul>\n            </div>\n");
}

fn render_suggestions(page: &mut String, suggestions: &[String]) {
    page.push_str("            <div>\n");
    page.push_str(r#"                <h2 class="text-2xl font-semibold text-gray-800 text-center mb-4">Job Opportunities</h2>"#);
    page.push_str("\n                <ul class=\"space-y-4\">\n");
    for title in suggestions {
        page.push_str(r#"                    <li class="bg-green-500 text-white p-4 rounded-lg shadow-lg">"#);
        page.push_str("<strong class=\"text-lg\">");
        page.push_str(&escape_html(title));
        page.push_str("</strong></li>\n");
    }
    page.push_str("                </ul>\n            </div>\n");
}

/// Minimal HTML escaping for text and attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, company: Option<&str>) -> InternshipRecord {
        InternshipRecord {
            title: title.to_string(),
            company: company.map(String::from),
            link: "https://internshala.com/internship/detail-1".to_string(),
        }
    }

    #[test]
    fn test_bare_form_has_no_result_sections() {
        let page = render_page(None);
        assert!(page.contains("Upload Your Resume"));
        assert!(!page.contains("Top Internship Opportunities"));
        assert!(!page.contains("Job Opportunities"));
    }

    #[test]
    fn test_empty_results_render_like_bare_form() {
        let view = ResultsView {
            internships: vec![],
            job_suggestions: vec![],
        };
        assert_eq!(render_page(Some(&view)), render_page(None));
    }

    #[test]
    fn test_results_render_both_sections() {
        let view = ResultsView {
            internships: vec![record("Backend Intern", Some("Acme"))],
            job_suggestions: vec!["Data Analyst".to_string()],
        };
        let page = render_page(Some(&view));
        assert!(page.contains("Backend Intern"));
        assert!(page.contains("at Acme"));
        assert!(page.contains("Data Analyst"));
        assert!(page.contains("Try Again"));
    }

    #[test]
    fn test_missing_company_omits_company_line() {
        let view = ResultsView {
            internships: vec![record("Solo Intern", None)],
            job_suggestions: vec![],
        };
        let page = render_page(Some(&view));
        assert!(page.contains("Solo Intern"));
        assert!(!page.contains("at </span>"));
        assert!(!page.contains("block text-sm\">at"));
    }

    #[test]
    fn test_scraped_text_is_escaped() {
        let view = ResultsView {
            internships: vec![record("<script>alert(1)</script>", Some("A&B \"Corp\""))],
            job_suggestions: vec![],
        };
        let page = render_page(Some(&view));
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(page.contains("A&amp;B &quot;Corp&quot;"));
    }

    #[test]
    fn test_escape_html_passes_plain_text_through() {
        assert_eq!(escape_html("Data Analyst"), "Data Analyst");
    }
}
