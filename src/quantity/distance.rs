quantity!(Miles, "mi");
