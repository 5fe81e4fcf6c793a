//! HTML pages for the book list and the edit form
//!
//! Every piece of user text passes through [`escape`] before it is
//! written into markup.

use std::borrow::Cow;

use crate::models::Book;

const STYLE: &str = "body { font-family: sans-serif; margin: 2rem; } \
    table { border-collapse: collapse; } \
    td, th { padding: 0.25rem 0.75rem; border-bottom: 1px solid #ddd; text-align: left; }";

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

/// Index page: every book with edit/delete links, then the create form.
pub fn index_page(books: &[Book]) -> String {
    let mut body = String::from("<h1>Book List</h1>\n");

    if books.is_empty() {
        body.push_str("<p class=\"empty\">No books yet.</p>\n");
    } else {
        body.push_str("<table>\n<thead><tr><th>Title</th><th>Author</th><th></th></tr></thead>\n<tbody>\n");
        for book in books {
            body.push_str(&format!(
                "<tr><td>{title}</td><td>{author}</td>\
                 <td><a href=\"/edit/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>\n",
                id = book.id,
                title = escape(&book.title),
                author = escape(&book.author),
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str(
        "<h2>Add a book</h2>\n\
         <form action=\"/create\" method=\"post\">\n\
         <label>Title <input type=\"text\" name=\"title\" required></label>\n\
         <label>Author <input type=\"text\" name=\"author\" required></label>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n",
    );

    page("Books", &body)
}

/// Edit page: update form pre-filled with the book's current values.
pub fn edit_page(book: &Book) -> String {
    let body = format!(
        "<h1>Edit Book</h1>\n\
         <form action=\"/update/{id}\" method=\"post\">\n\
         <label>Title <input type=\"text\" name=\"title\" value=\"{title}\" required></label>\n\
         <label>Author <input type=\"text\" name=\"author\" value=\"{author}\" required></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/\">Back to list</a></p>\n",
        id = book.id,
        title = escape(&book.title),
        author = escape(&book.author),
    );

    page("Edit Book", &body)
}
