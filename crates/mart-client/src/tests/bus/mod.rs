mod update_buses;
