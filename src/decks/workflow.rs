//! "AI-Assisted Development with Claude": the dark, neon-accented deck.

use crate::common::{RGBColor, Result};
use crate::deck::{
    ContentItem, Deck, ItemStyle, LayoutConfig, Palette, SlideSpec, Theme, Typography,
};
use crate::ooxml::pptx::PresentationMetadata;

use super::rows;

const DARK: RGBColor = RGBColor::hex(0x1a1a2e);
const DARKER: RGBColor = RGBColor::hex(0x0f0f23);
const ACCENT: RGBColor = RGBColor::hex(0x00d4ff);
const PURPLE: RGBColor = RGBColor::hex(0x7c3aed);
const WHITE: RGBColor = RGBColor::hex(0xeaeaea);
const CODE: RGBColor = RGBColor::hex(0x2d2d44);
const GREEN: RGBColor = RGBColor::hex(0x00ff00);

/// Dark background with cyan headlines and purple labels.
pub fn theme() -> Theme {
    Theme {
        name: "Neon".to_string(),
        palette: Palette {
            background: Some(DARK),
            title_background: Some(DARKER),
            title: ACCENT,
            subtitle: WHITE,
            headline: ACCENT,
            body: WHITE,
            accent: ACCENT,
            subtle: WHITE,
            emphasis: PURPLE,
            success: GREEN,
            code_text: ACCENT,
            code_background: CODE,
            table_header: PURPLE,
            table_header_text: WHITE,
            table_text: WHITE,
            table_fill: CODE,
            table_band: None,
            border: Some(PURPLE),
        },
        typography: Typography::default(),
        layout: LayoutConfig::default(),
    }
}

pub fn metadata() -> PresentationMetadata {
    PresentationMetadata {
        title: "AI-Assisted Development with Claude".to_string(),
        subject: "Automating Code Review & Development Workflows".to_string(),
        author: "Claude Code".to_string(),
        ..PresentationMetadata::default()
    }
}

/// Bold purple label followed by `spacing` inches.
fn label(text: &str, spacing: f64) -> ContentItem {
    ContentItem::text(text).with_style(ItemStyle::new().bold().color(PURPLE).spacing(spacing))
}

fn text(value: &str, spacing: f64) -> ContentItem {
    ContentItem::text(value).with_style(ItemStyle::new().spacing(spacing))
}

fn code(value: &str, spacing: f64) -> ContentItem {
    ContentItem::code(value).with_style(ItemStyle::new().spacing(spacing))
}

/// Table whose first row is a purple header.
fn table(cells: &[&[&str]], spacing: f64) -> Result<ContentItem> {
    let mut cells = rows(cells);
    if let Some(header) = cells.first_mut() {
        for cell in header.iter_mut() {
            cell.fill = Some(PURPLE);
            cell.bold = true;
        }
    }
    Ok(ContentItem::table(cells, true)?.with_style(ItemStyle::new().spacing(spacing)))
}

pub fn slides() -> Result<Vec<SlideSpec>> {
    Ok(vec![
        SlideSpec::title(
            "AI-Assisted Development with Claude",
            Some("Automating Code Review & Development Workflows"),
        ),
        SlideSpec::content(
            "What We'll Cover",
            vec![
                label("Part 1: AI-Demo Project", 0.4),
                ContentItem::bullets(&[
                    "Project architecture and core functions",
                    "GitHub Actions automation",
                    "Live bug detection demo",
                ]),
                label("Part 2: Claude Code CLI", 0.6),
                ContentItem::bullets(&[
                    "Essential commands and workflows",
                    "Best practices for AI-assisted coding",
                ]),
            ],
        ),
        SlideSpec::title("Part 1", Some("The AI-Demo Project")),
        SlideSpec::content(
            "Project Overview",
            vec![
                text("A Rust demo showcasing Claude AI + GitHub Actions", 0.6),
                label("Key Capabilities:", 0.4),
                ContentItem::bullets(&[
                    "Automatic PR code review on feature branches",
                    "Interactive @claude commands in PR/Issue comments",
                    "Test-driven development with AI assistance",
                    "Git operations automation",
                ]),
            ],
        ),
        SlideSpec::content(
            "Core Functions",
            vec![
                code(
                    r#"// Greeting function with personalization
pub fn greet_user(name: &str) -> String {
    format!("Hello, {name}! Welcome to our app.")
}

// Date formatting utility
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}"#,
                    2.8,
                ),
                ContentItem::text("✅ Both functions have comprehensive test coverage")
                    .with_style(ItemStyle::new().color(GREEN)),
            ],
        ),
        SlideSpec::content(
            "GitHub Workflows",
            vec![
                table(
                    &[
                        &["Workflow", "Trigger", "Action"],
                        &["claude.yml", "@claude comment", "Makes code changes, runs tests, commits"],
                        &["claude-pr-review.yml", "PR opened/updated", "Automatic code review"],
                    ],
                    1.8,
                )?,
                label("Workflow Features:", 0.4),
                ContentItem::bullets(&[
                    "Runs on feature/* and bugfix/* branches",
                    "Executes tests before and after changes",
                    "Posts structured review comments",
                ]),
            ],
        ),
        SlideSpec::content(
            "Live Demo: The Banner Bug",
            vec![
                text("Current feature/banner branch has intentional issues:", 0.5),
                code(
                    r#"fn print_baner(mesage: &str) -> &str {  // ❌ Typos!
    let mut length = 0;
    for _ in mesage.chars() {
        length += 1;  // ❌ Overcomplicated!
    }
    retrun mesage  // ❌ Syntax error!
}"#,
                    2.0,
                ),
                ContentItem::text("Claude will detect: typos, inefficient code, missing tests")
                    .with_style(ItemStyle::new().bold().color(ACCENT)),
            ],
        ),
        SlideSpec::title("Part 2", Some("Claude Code CLI")),
        SlideSpec::content(
            "What is Claude Code?",
            vec![
                text("An AI-powered command-line interface for software development", 0.6),
                label("Capabilities:", 0.4),
                ContentItem::bullets(&[
                    "Read, write, and edit code",
                    "Run terminal commands",
                    "Search and navigate codebases",
                    "Create commits and pull requests",
                    "Multi-file refactoring",
                ]),
                code("# Start Claude Code\nclaude", 1.0),
            ],
        ),
        SlideSpec::content(
            "Essential Commands",
            vec![table(
                &[
                    &["Command", "Purpose"],
                    &["/continue", "Resume most recent session"],
                    &["/resume", "Pick from all past sessions"],
                    &["/clear", "Reset context between tasks"],
                    &["/compact", "Compress context manually"],
                    &["/context", "Check context usage"],
                    &["/init", "Generate CLAUDE.md for project"],
                ],
                3.0,
            )?],
        ),
        SlideSpec::content(
            "Permission Modes",
            vec![
                text("Press Shift+Tab to cycle through modes:", 0.5),
                table(
                    &[
                        &["Mode", "Behavior"],
                        &["Normal", "Claude asks before changes"],
                        &["Auto-Accept", "File edits auto-approved"],
                        &["Plan Mode", "Read-only, creates plans"],
                    ],
                    1.8,
                )?,
                label("Keyboard Shortcuts:", 0.4),
                ContentItem::bullets(&[
                    "Esc - Stop Claude mid-action",
                    "Esc + Esc - Open rewind menu",
                    "Ctrl+R - Command history search",
                ]),
            ],
        ),
        SlideSpec::content(
            "Best Practices",
            vec![
                label("The Golden Rule:", 0.4),
                ContentItem::text("\"Give Claude something to verify its work against\"")
                    .with_style(ItemStyle::new().size(20.0).spacing(0.5)),
                ContentItem::bullets(&[
                    "Tests, screenshots, expected outputs",
                    "Without verification → plausible code",
                    "With verification → Claude self-corrects",
                ]),
                label("The Workflow:", 0.5),
                ContentItem::numbered(&[
                    "Explore (Plan Mode) → Read & understand",
                    "Plan (Plan Mode) → Design approach",
                    "Implement (Normal Mode) → Code with tests",
                ]),
            ],
        ),
        SlideSpec::content(
            "Session Management",
            vec![
                code(
                    "# Resume sessions
claude --continue         # Most recent
claude --resume           # Interactive picker

# In-session
/rename oauth-migration   # Name for easy finding
/clear                    # Fresh context",
                    2.0,
                ),
                label("Pro Tips:", 0.4),
                ContentItem::bullets(&[
                    "Name sessions descriptively",
                    "Use /clear between unrelated tasks",
                    "Context is your most precious resource",
                ]),
            ],
        ),
        SlideSpec::content(
            "Pro Tips",
            vec![
                label("Subagents", 0.3),
                text("Use Task tool for complex research - runs in separate context", 0.5),
                label("Skills", 0.3),
                text("Create reusable workflows in ~/.claude/skills/", 0.5),
                label("Headless Mode", 0.3),
                code(
                    r#"# One-off queries
claude -p "Explain this code"

# Pipe data through Claude
cat error.log | claude -p "Explain this error""#,
                    1.5,
                ),
            ],
        ),
        SlideSpec::content(
            "Key Takeaways",
            vec![ContentItem::numbered(&[
                "Verification is essential - Give Claude tests or expected outputs",
                "Manage context aggressively - Use /clear between tasks",
                "Explore before implementing - Plan Mode for understanding",
                "Name your sessions - Makes resuming easy",
                "Automate with workflows - GitHub Actions + Claude = powerful",
            ])],
        ),
        SlideSpec::content(
            "Resources",
            vec![
                label("Documentation", 0.4),
                ContentItem::bullets(&[
                    "Claude Code Docs: docs.anthropic.com/claude-code",
                    "GitHub Actions: docs.github.com/en/actions",
                ]),
                label("This Project", 0.5),
                ContentItem::bullets(&[
                    "Repository: ai-demo",
                    "Branch: feature/banner (with intentional bugs)",
                ]),
                label("Get Help", 0.5),
                ContentItem::bullets(&[
                    "/help in Claude Code",
                    "GitHub Issues: github.com/anthropics/claude-code/issues",
                ]),
            ],
        ),
        SlideSpec::title("Thank You!", Some("Questions?\n\nclaude --continue")),
    ])
}

pub fn deck() -> Result<Deck> {
    Ok(Deck {
        metadata: metadata(),
        theme: theme(),
        slides: slides()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::SlideKind;

    #[test]
    fn test_slide_count_and_bookends() {
        let slides = slides().unwrap();
        assert_eq!(slides.len(), 17);
        assert_eq!(slides[0].title, "AI-Assisted Development with Claude");
        assert!(matches!(slides[16].kind, SlideKind::Title { .. }));
    }

    #[test]
    fn test_render() {
        let pres = deck().unwrap().render().unwrap();
        assert_eq!(pres.slide_count(), 17);
        assert_eq!(pres.metadata().theme_name, "Neon");
        assert_eq!(pres.slide(9).unwrap().title(), Some("Essential Commands"));
    }
}
