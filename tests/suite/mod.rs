mod boolean;
mod bytes;
mod cli;
mod dispatch;
mod enums;
mod names;
mod numeric;
