use askama::Template;

use super::PageData;

#[derive(Template)]
#[template(path = "partners.html")]
pub struct PartnersPage<'a> {
    pub page: &'a PageData,
    pub title: &'a str,
}

#[derive(Template)]
#[template(path = "status/404.html")]
pub struct NotFoundPage<'a> {
    pub page: &'a PageData,
    pub title: &'a str,
}
