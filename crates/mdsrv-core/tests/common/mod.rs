pub mod mdsrv_server;
