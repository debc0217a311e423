//! Ядро разрешения измерений: чистые синхронные преобразования над уже
//! загруженным набором строк снапшотов. Без блокировок, без состояния
//! между вызовами, без побочных эффектов.

pub mod address;
pub mod filter;
pub mod grouping;
pub mod name_key;
pub mod snapshot;
