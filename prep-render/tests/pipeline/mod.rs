mod documents;
mod properties;
mod totality;
