pub(crate) mod str;
