//! Per-record card templates.
//!
//! Record fields follow the same trust rule as block values: written as-is
//! unless [`RenderOptions::sanitize`] is set, in which case they are escaped.

use crate::content::{RenderOptions, render_content_blocks_with};
use crate::models::{Article, Member, Project, Reminder};
use crate::routes::helpers::html_escape;

fn field(value: &str, options: RenderOptions) -> String {
    if options.sanitize {
        html_escape(value)
    } else {
        value.to_string()
    }
}

pub fn render_member_card(member: &Member, options: RenderOptions) -> String {
    let avatar = field(&member.avatar, options);
    let name = field(&member.name, options);
    let role = field(&member.role, options);
    format!(
        "<div class=\"member-card\">\
         <img src=\"{avatar}\" alt=\"{name}\" class=\"member-avatar\">\
         <div class=\"member-info\"><h4>{name}</h4><p>{role}</p></div>\
         </div>"
    )
}

pub fn render_project_card(project: &Project, options: RenderOptions) -> String {
    let thumbnail = field(&project.thumbnail_url(), options);
    let title = field(&project.title, options);
    let color = field(project.title_color(), options);
    let body = render_content_blocks_with(&project.blocks, options);
    format!(
        "<div class=\"project-card\">\
         <div class=\"project-img-wrapper\">\
         <img src=\"{thumbnail}\" alt=\"{title}\" class=\"project-thumbnail\">\
         </div>\
         <div class=\"project-info\">\
         <h4 style=\"color: {color}\">{title}</h4>\
         <div class=\"content-blocks-preview\">{body}</div>\
         </div>\
         </div>"
    )
}

pub fn render_article_card(article: &Article, options: RenderOptions) -> String {
    let title = field(&article.title, options);
    let date = field(&article.date, options);
    let author = field(&article.author, options);
    let body = render_content_blocks_with(&article.blocks, options);
    format!(
        "<div class=\"article-card\">\
         <div class=\"article-header\">\
         <h4>{title}</h4>\
         <span class=\"article-date\"><i class=\"fa-regular fa-calendar\"></i> {date}</span>\
         </div>\
         <div class=\"article-body\">{body}</div>\
         <div class=\"article-footer\">\
         <span><i class=\"fa-solid fa-user-pen\"></i> {author}</span>\
         </div>\
         </div>"
    )
}

pub fn render_reminder(reminder: &Reminder, options: RenderOptions) -> String {
    format!("<li class=\"reminder-item\">{}</li>", field(&reminder.text, options))
}

pub fn render_members(members: &[Member], options: RenderOptions) -> String {
    members.iter().map(|m| render_member_card(m, options)).collect()
}

pub fn render_projects(projects: &[Project], options: RenderOptions) -> String {
    projects.iter().map(|p| render_project_card(p, options)).collect()
}

pub fn render_articles(articles: &[Article], options: RenderOptions) -> String {
    articles.iter().map(|a| render_article_card(a, options)).collect()
}

pub fn render_reminders(reminders: &[Reminder], options: RenderOptions) -> String {
    reminders.iter().map(|r| render_reminder(r, options)).collect()
}
