mod chat;
mod question;
