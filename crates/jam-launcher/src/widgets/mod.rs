pub mod peer_list;
