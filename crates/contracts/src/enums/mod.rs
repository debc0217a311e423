pub mod delivery_channel;
