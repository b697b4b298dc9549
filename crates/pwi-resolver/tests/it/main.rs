mod find_links;
