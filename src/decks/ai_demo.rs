//! "AI Demo - Claude Code Integration": the light, corporate deck.

use crate::common::{RGBColor, Result};
use crate::deck::{
    ContentItem, Deck, ItemStyle, LayoutConfig, Palette, SlideSpec, Theme, TitleLayout, Typography,
};
use crate::ooxml::pptx::PresentationMetadata;

use super::rows;

const HEADLINE: RGBColor = RGBColor::hex(0x1f2937);
const BODY: RGBColor = RGBColor::hex(0x4b5563);
const ACCENT: RGBColor = RGBColor::hex(0x3b82f6);
const SUBTLE: RGBColor = RGBColor::hex(0x6b7280);
const CODE_TEXT: RGBColor = RGBColor::hex(0xe5e7eb);
const CODE_BG: RGBColor = RGBColor::hex(0x1f2937);
const TABLE_BG: RGBColor = RGBColor::hex(0xf9fafb);
const TABLE_ALT: RGBColor = RGBColor::hex(0xffffff);
const TABLE_HEADER: RGBColor = RGBColor::hex(0x374151);

const MARGIN: f64 = 0.75;
const CONTENT_WIDTH: f64 = 10.0 - MARGIN * 2.0;

/// White background, gray text, blue accents.
pub fn theme() -> Theme {
    Theme {
        name: "Corporate".to_string(),
        palette: Palette {
            background: None,
            title_background: None,
            title: HEADLINE,
            subtitle: ACCENT,
            headline: HEADLINE,
            body: BODY,
            accent: ACCENT,
            subtle: SUBTLE,
            emphasis: HEADLINE,
            success: ACCENT,
            code_text: CODE_TEXT,
            code_background: CODE_BG,
            table_header: TABLE_HEADER,
            table_header_text: CODE_TEXT,
            table_text: HEADLINE,
            table_fill: TABLE_BG,
            table_band: Some(TABLE_ALT),
            border: None,
        },
        typography: Typography {
            subtitle_size: 22.0,
            headline_size: 24.0,
            body_size: 14.0,
            ..Typography::default()
        },
        layout: LayoutConfig {
            margin_x: MARGIN,
            content_width: CONTENT_WIDTH,
            headline_top: MARGIN,
            headline_height: 0.6,
            content_top: 1.5,
            title: TitleLayout {
                top: 2.0,
                height: 0.8,
                subtitle_offset: 0.9,
                subtitle_height: 0.5,
                tagline_offset: 1.6,
                tagline_height: 0.4,
            },
            section: TitleLayout {
                top: 2.2,
                height: 0.8,
                subtitle_offset: 0.9,
                subtitle_height: 0.5,
                tagline_offset: 1.6,
                tagline_height: 0.4,
            },
            bullet_line_spacing: 0.5,
            table_row_height: 0.5,
            list_indent: 0.2,
            code_inset: Some(12.0),
            ..LayoutConfig::default()
        },
    }
}

pub fn metadata() -> PresentationMetadata {
    PresentationMetadata {
        title: "AI Demo - Claude Code Integration".to_string(),
        subject: "Claude Code + GitHub Actions".to_string(),
        author: "Claude Code".to_string(),
        ..PresentationMetadata::default()
    }
}

/// Gray one-line caption above a code block or table.
fn caption(text: &str) -> ContentItem {
    ContentItem::text(text).with_style(ItemStyle::new().color(SUBTLE).spacing(0.5))
}

/// Introductory body sentence.
fn lead(text: &str) -> ContentItem {
    ContentItem::text(text).with_style(ItemStyle::new().spacing(0.7))
}

/// Code block with an explicit frame height.
fn code(value: &str, height: f64) -> ContentItem {
    ContentItem::code(value).with_style(ItemStyle::new().height(height).spacing(height + 0.2))
}

/// Two-column reference table; the first column is monospace.
fn reference(header: [&str; 2], entries: &[&[&str]]) -> Result<ContentItem> {
    let mut cells = rows(&[&header[..]]);
    for mut row in rows(entries) {
        if let Some(first) = row.first_mut() {
            first.mono = true;
        }
        cells.push(row);
    }
    ContentItem::table(cells, true)
}

pub fn slides() -> Result<Vec<SlideSpec>> {
    Ok(vec![
        // 1
        SlideSpec::title("AI Demo", Some("Claude Code + GitHub Actions Integration"))
            .with_tagline("Automating development workflows with AI"),
        SlideSpec::content(
            "What is AI Demo?",
            vec![
                lead("A demonstration project integrating Claude Code CLI with GitHub Actions for automated code assistance."),
                ContentItem::bullets(&[
                    "Trigger Claude via @claude mentions in PRs and Issues",
                    "Automatic code changes on Pull Requests",
                    "Analysis and recommendations on Issues",
                    "Built-in test automation",
                ]),
            ],
        ),
        SlideSpec::content(
            "Project Structure",
            vec![
                ContentItem::code(
                    "ai-demo/
├── .github/workflows/claude.yml
├── src/lib.rs
├── src/bin/greet.rs
├── Cargo.toml
└── README.md",
                )
                .with_style(ItemStyle::new().column(MARGIN, 4.0).height(2.2).spacing(0.0)),
                ContentItem::text("Core Application").with_style(
                    ItemStyle::new()
                        .column(5.0, 4.25)
                        .size(18.0)
                        .bold()
                        .color(HEADLINE)
                        .spacing(0.5),
                ),
                ContentItem::code(
                    r#"fn greet_user(name: &str) -> String {
    format!("Hello, {name}!")
}

fn format_date(date: NaiveDate) -> String {
    date.format("%A").to_string()
}"#,
                )
                .with_style(ItemStyle::new().column(5.0, 4.25).height(2.2).spacing(2.4)),
            ],
        ),
        SlideSpec::content(
            "GitHub Action Workflow",
            vec![
                caption("Configured in .github/workflows/claude.yml"),
                code(
                    "name: Claude

on:
  issue_comment:
    types: [created]

jobs:
  claude:
    if: contains(github.event.comment.body, '@claude')
    runs-on: ubuntu-latest
    steps:
      - name: Install Claude Code
        run: npm install -g @anthropic-ai/claude-code",
                    3.2,
                ),
            ],
        ),
        // 5
        SlideSpec::section("Claude Code CLI", Some("Essential commands for your workflow")),
        SlideSpec::content(
            "Getting Started",
            vec![code(
                r#"# Install globally
npm install -g @anthropic-ai/claude-code

# Start interactive session
claude

# One-shot command
claude "explain this code"

# Print output only (non-interactive)
claude --print "fix the bug""#,
                3.5,
            )],
        ),
        SlideSpec::content(
            "Common Flags",
            vec![code(
                "# Skip permission prompts (CI/CD)
claude --dangerously-skip-permissions

# Continue last conversation
claude --continue

# Resume specific session
claude --resume <session-id>

# Use specific model
claude --model opus",
                3.5,
            )],
        ),
        SlideSpec::content(
            "Slash Commands",
            vec![
                caption("Built-in commands for common tasks"),
                reference(
                    ["Command", "Description"],
                    &[
                        &["/help", "Show available commands"],
                        &["/init", "Initialize project with CLAUDE.md"],
                        &["/review", "Review code changes"],
                        &["/pr-comments", "Address PR feedback"],
                        &["/compact", "Condense conversation context"],
                    ],
                )?,
            ],
        ),
        SlideSpec::content(
            "More Slash Commands",
            vec![reference(
                ["Command", "Description"],
                &[
                    &["/clear", "Clear conversation history"],
                    &["/config", "View/edit configuration"],
                    &["/cost", "Show token usage and costs"],
                    &["/doctor", "Check installation health"],
                ],
            )?],
        ),
        // 10
        SlideSpec::content(
            "Working with Git",
            vec![code(
                r#"# Create a commit
claude "commit these changes"

# Create a PR
claude "create a PR for this feature"

# Review current changes
claude /review

# Address PR comments
claude /pr-comments"#,
                3.0,
            )],
        ),
        SlideSpec::content(
            "Project Context",
            vec![
                caption("Initialize with /init to create a CLAUDE.md file:"),
                code(
                    "# Project: AI Demo

## Commands
- cargo test    Run tests
- cargo run     Start application

## Style Guidelines
- Run cargo fmt before committing
- Prefer borrowing over cloning
- Add doc comments for public functions",
                    2.8,
                ),
            ],
        ),
        SlideSpec::content(
            "Environment Variables",
            vec![code(
                "# Required: API Key
export ANTHROPIC_API_KEY=sk-...

# Optional: Custom config location
export CLAUDE_CONFIG_DIR=~/.claude

# Optional: Disable telemetry
export CLAUDE_CODE_DISABLE_TELEMETRY=1",
                2.8,
            )],
        ),
        SlideSpec::content(
            "Using @claude on Pull Requests",
            vec![
                code("@claude please add input validation", 0.5),
                ContentItem::text("Claude will:")
                    .with_style(ItemStyle::new().bold().color(HEADLINE)),
                ContentItem::numbered(&[
                    "Analyze the request and codebase",
                    "Make the necessary code changes",
                    "Add or update tests",
                    "Commit and push to the branch",
                ]),
            ],
        ),
        SlideSpec::content(
            "Using @claude on Issues",
            vec![
                code("@claude how can we improve date formatting?", 0.5),
                ContentItem::text("Claude will:")
                    .with_style(ItemStyle::new().bold().color(HEADLINE)),
                ContentItem::numbered(&[
                    "Analyze the codebase",
                    "Provide detailed recommendations",
                    "Suggest implementation approach",
                    "No code changes (read-only mode)",
                ]),
            ],
        ),
        // 15
        SlideSpec::section(
            "MCP Servers",
            Some("Model Context Protocol - Extending Claude's capabilities"),
        ),
        SlideSpec::content(
            "What are MCP Servers?",
            vec![
                lead("MCP servers give Claude access to external tools and data sources."),
                ContentItem::bullets(&[
                    "Connect to databases (PostgreSQL, SQLite)",
                    "Access external APIs (GitHub, Slack, Jira)",
                    "Read from file systems and cloud storage",
                    "Integrate with design tools (Figma)",
                    "Custom tools for your specific needs",
                ]),
            ],
        ),
        SlideSpec::content(
            "Adding MCP Servers",
            vec![
                caption("Configure in ~/.claude/settings.json:"),
                code(
                    r#"{
  "mcpServers": {
    "github": {
      "command": "npx",
      "args": ["-y", "@anthropic/mcp-github"],
      "env": {
        "GITHUB_TOKEN": "ghp_xxx"
      }
    }
  }
}"#,
                    2.8,
                ),
            ],
        ),
        SlideSpec::content(
            "Popular MCP Servers",
            vec![reference(
                ["Package", "Capability"],
                &[
                    &["@anthropic/mcp-github", "GitHub issues, PRs, repos"],
                    &["@anthropic/mcp-postgres", "PostgreSQL databases"],
                    &["@anthropic/mcp-filesystem", "Extended file access"],
                    &["@anthropic/mcp-slack", "Slack messaging"],
                ],
            )?
            .with_style(ItemStyle::new().size(13.0))],
        ),
        SlideSpec::section("Skills", Some("Custom slash commands for your workflow")),
        // 20
        SlideSpec::content(
            "What are Skills?",
            vec![
                lead("Skills are reusable prompts invoked with slash commands."),
                ContentItem::bullets(&[
                    "Triggered with /skill-name syntax",
                    "Can accept arguments and parameters",
                    "Stored in ~/.claude/skills/ directory",
                    "Share across projects or keep project-specific",
                    "Chain multiple skills together",
                ]),
            ],
        ),
        SlideSpec::content(
            "Creating a Skill",
            vec![
                caption("Create ~/.claude/skills/review-security.md:"),
                code(
                    "---
name: review-security
description: Security code review
---

Review the code for security vulnerabilities:
- SQL injection risks
- XSS vulnerabilities
- Authentication issues
- Sensitive data exposure

Focus on: $ARGUMENTS",
                    2.8,
                ),
            ],
        ),
        SlideSpec::content(
            "Using Skills",
            vec![code(
                "# Invoke a skill
/review-security auth module

# Built-in skills
/init          # Initialize CLAUDE.md
/review        # Review code changes
/pr-comments   # Address PR feedback

# List available skills
/help",
                3.0,
            )],
        ),
        SlideSpec::section("CLAUDE.md", Some("Project context document for Claude")),
        SlideSpec::content(
            "Why CLAUDE.md?",
            vec![
                lead("Provides project context that persists across sessions."),
                ContentItem::bullets(&[
                    "Automatically loaded at session start",
                    "Defines build commands and scripts",
                    "Documents code style preferences",
                    "Describes architecture and patterns",
                    "Lists important files and conventions",
                ]),
            ],
        ),
        // 25
        SlideSpec::content(
            "CLAUDE.md Structure",
            vec![code(
                "# Project Name

## Build Commands
- cargo build  # Compile the workspace
- cargo test   # Run test suite
- cargo run    # Start the binary

## Architecture
- /src         # Source code
- /tests       # Integration tests

## Code Style
- Edition 2024, clippy clean
- Errors via thiserror",
                3.5,
            )],
        ),
        SlideSpec::section("Subagents", Some("Delegating tasks to specialized agents")),
        SlideSpec::content(
            "What are Subagents?",
            vec![
                lead("Claude can spawn child agents to handle specific subtasks independently."),
                ContentItem::bullets(&[
                    "Autonomous task execution with own context",
                    "Specialized for specific task types (explore, plan, code)",
                    "Results returned to parent agent",
                    "Reduces main context pollution",
                    "Enables parallel task processing",
                ]),
            ],
        ),
        SlideSpec::content(
            "Subagent Types",
            vec![
                caption("Built-in specialized agents for different tasks"),
                reference(
                    ["Agent", "Purpose"],
                    &[
                        &["Explore", "Search and understand codebase"],
                        &["Plan", "Design implementation strategies"],
                        &["Bash", "Execute shell commands"],
                        &["Code Review", "Analyze code for issues"],
                    ],
                )?,
            ],
        ),
        SlideSpec::content(
            "Using Subagents",
            vec![
                caption("Claude automatically spawns subagents when needed:"),
                code(
                    r#"# Claude will use explore subagent
"Find all API endpoints in this codebase"

# Claude will use plan subagent
"Plan the implementation of user auth"

# You can also explicitly request
"Use a subagent to search for error
handling patterns across all files""#,
                    2.8,
                ),
            ],
        ),
        // 30
        SlideSpec::section(
            "Parallel Agents",
            Some("Running multiple Claude instances simultaneously"),
        ),
        SlideSpec::content(
            "Why Parallel Agents?",
            vec![ContentItem::bullets(&[
                "Work on multiple features simultaneously",
                "Reduce total development time",
                "Independent contexts prevent interference",
                "Each agent has full Claude capabilities",
                "Scale up for large refactoring tasks",
            ])
            .with_style(ItemStyle::new().spacing(2.75))],
        ),
        SlideSpec::content(
            "Running Agents in Parallel",
            vec![
                caption("Launch multiple Claude sessions in separate terminals:"),
                code(
                    r#"# Terminal 1 - Feature A
claude "implement user login form"

# Terminal 2 - Feature B
claude "add payment processing"

# Terminal 3 - Bug fixes
claude "fix the date parsing bug""#,
                    2.5,
                ),
            ],
        ),
        SlideSpec::section("Git Worktrees", Some("Isolated directories for parallel development")),
        SlideSpec::content(
            "What are Git Worktrees?",
            vec![
                lead("Git worktrees allow multiple working directories from one repository."),
                ContentItem::bullets(&[
                    "Each worktree has its own branch checkout",
                    "Shared git history and objects",
                    "No conflicts between parallel changes",
                    "Perfect for running multiple agents",
                ]),
            ],
        ),
        // 35
        SlideSpec::content(
            "Creating Worktrees",
            vec![code(
                "# Create worktree for feature branch
git worktree add ../project-feature-a feature-a

# Create worktree with new branch
git worktree add -b feature-b ../project-feature-b

# List all worktrees
git worktree list

# Remove worktree when done
git worktree remove ../project-feature-a",
                3.0,
            )],
        ),
        SlideSpec::content(
            "Parallel Agents + Worktrees",
            vec![
                caption("The optimal setup for parallel development:"),
                code(
                    r#"# Setup worktrees
git worktree add -b auth ../myapp-auth
git worktree add -b payments ../myapp-payments

# Terminal 1 - Auth feature
cd ../myapp-auth && claude "implement OAuth"

# Terminal 2 - Payments feature
cd ../myapp-payments && claude "add Stripe""#,
                    2.8,
                ),
            ],
        ),
        SlideSpec::content(
            "Worktree Workflow",
            vec![ContentItem::numbered(&[
                "Create worktree with feature branch",
                "Open new terminal in worktree directory",
                "Launch Claude agent for that feature",
                "Merge completed branches back to main",
                "Remove worktree after merging",
            ])],
        ),
        SlideSpec::section("Memory", Some("Persistent knowledge across sessions")),
        SlideSpec::content(
            "Memory Levels",
            vec![
                ContentItem::text("Claude stores learnings in two locations:")
                    .with_style(ItemStyle::new().spacing(0.6)),
                code(
                    "# Global memory (all projects)
~/.claude/CLAUDE.md

# Per-project memory
~/.claude/projects/<path>/MEMORY.md",
                    1.4,
                ),
                ContentItem::bullets(&[
                    "Auto-updated as Claude learns from mistakes",
                    "Persists across conversations and sessions",
                    "Use --resume to continue previous sessions",
                    "Add custom notes to guide future behavior",
                ])
                .with_style(ItemStyle::new().height(1.8)),
            ],
        ),
        // 40
        SlideSpec::content(
            "Key Takeaways",
            vec![ContentItem::bullets(&[
                "MCP servers extend Claude with external tools",
                "Skills create reusable custom commands",
                "CLAUDE.md provides persistent project context",
                "Subagents + parallel agents scale your work",
                "Git worktrees enable isolated development",
                "Memory persists learnings across sessions",
            ])],
        ),
        SlideSpec::title("Questions?", None).with_tagline("Built with Claude Code"),
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
    fn test_slide_count() {
        let slides = slides().unwrap();
        assert_eq!(slides.len(), 41);
        assert_eq!(slides[0].title, "AI Demo");
        assert_eq!(slides[40].title, "Questions?");
    }

    #[test]
    fn test_section_dividers() {
        let sections: Vec<_> = slides()
            .unwrap()
            .into_iter()
            .filter(|s| matches!(s.kind, SlideKind::Section { .. }))
            .map(|s| s.title)
            .collect();
        assert_eq!(
            sections,
            [
                "Claude Code CLI",
                "MCP Servers",
                "Skills",
                "CLAUDE.md",
                "Subagents",
                "Parallel Agents",
                "Git Worktrees",
                "Memory"
            ]
        );
    }

    #[test]
    fn test_render_side_by_side_slide() {
        let pres = deck().unwrap().render().unwrap();
        assert_eq!(pres.slide_count(), 41);

        let slide = pres.slide(2).unwrap();
        assert_eq!(slide.title(), Some("Project Structure"));
        let shapes = slide.shapes();
        assert_eq!(shapes.len(), 4);
        // Left code block and the right column label share a row
        assert_eq!(shapes[1].frame().y, shapes[2].frame().y);
        assert!(shapes[2].frame().x > shapes[1].frame().x);
    }
}
