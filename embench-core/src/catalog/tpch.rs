//! TPC-H: 8 source tables, 22 queries.

use super::{DdlDefinition, QueryDefinition, TableDefinition};

pub const TABLES: &[TableDefinition] = &[
    TableDefinition { placeholder: "LINEITEM_TABLE", table: "lineitem" },
    TableDefinition { placeholder: "CUSTOMER_TABLE", table: "customer" },
    TableDefinition { placeholder: "ORDERS_TABLE", table: "orders" },
    TableDefinition { placeholder: "PART_TABLE", table: "part" },
    TableDefinition { placeholder: "SUPPLIER_TABLE", table: "supplier" },
    TableDefinition { placeholder: "PARTSUPP_TABLE", table: "partsupp" },
    TableDefinition { placeholder: "NATION_TABLE", table: "nation" },
    TableDefinition { placeholder: "REGION_TABLE", table: "region" },
];

pub const QUERIES: &[QueryDefinition] = &[
    QueryDefinition {
        name: "tpch-q1",
        sql: r#"
SELECT
    l_returnflag,
    l_linestatus,
    SUM(l_quantity) AS sum_qty,
    SUM(l_extendedprice) AS sum_base_price,
    SUM(l_extendedprice * (1 - l_discount)) AS sum_disc_price,
    SUM(l_extendedprice * (1 - l_discount) * (1 + l_tax)) AS sum_charge,
    AVG(l_quantity) AS avg_qty,
    AVG(l_extendedprice) AS avg_price,
    AVG(l_discount) AS avg_disc,
    COUNT(*) AS count_order
FROM
    {LINEITEM_TABLE}
WHERE
    l_shipdate <= DATEADD(day, -116, '1998-12-01')
GROUP BY
    l_returnflag,
    l_linestatus
ORDER BY
    l_returnflag,
    l_linestatus;
"#,
    },
    QueryDefinition {
        name: "tpch-q2",
        sql: r#"
SELECT
    s_acctbal,
    s_name,
    n_name,
    p_partkey,
    p_mfgr,
    s_address,
    s_phone,
    s_comment
FROM
    {PART_TABLE},
    {SUPPLIER_TABLE},
    {PARTSUPP_TABLE},
    {NATION_TABLE},
    {REGION_TABLE}
WHERE
    p_partkey = ps_partkey
  AND s_suppkey = ps_suppkey
  AND p_size = 15
  AND p_type LIKE '%BRASS'
  AND s_nationkey = n_nationkey
  AND n_regionkey = r_regionkey
  AND r_name = 'EUROPE'
  AND ps_supplycost = (
    SELECT MIN(ps_supplycost)
    FROM
        {PARTSUPP_TABLE},
        {SUPPLIER_TABLE},
        {NATION_TABLE},
        {REGION_TABLE}
    WHERE
        p_partkey = ps_partkey
      AND s_suppkey = ps_suppkey
      AND s_nationkey = n_nationkey
      AND n_regionkey = r_regionkey
      AND r_name = 'EUROPE'
)
ORDER BY
    s_acctbal DESC,
    n_name,
    s_name,
    p_partkey
    LIMIT 100;
"#,
    },
    QueryDefinition {
        name: "tpch-q3",
        sql: r#"
SELECT
    l_orderkey,
    SUM(l_extendedprice * (1 - l_discount)) AS revenue,
    o_orderdate,
    o_shippriority
FROM
    {CUSTOMER_TABLE},
    {ORDERS_TABLE},
    {LINEITEM_TABLE}
WHERE
    c_mktsegment = 'BUILDING'
  AND c_custkey = o_custkey
  AND l_orderkey = o_orderkey
  AND o_orderdate < DATE '1995-03-15'
  AND l_shipdate > DATE '1995-03-15'
GROUP BY
    l_orderkey,
    o_orderdate,
    o_shippriority
ORDER BY
    revenue DESC,
    o_orderdate
    LIMIT 10;
"#,
    },
    QueryDefinition {
        name: "tpch-q4",
        sql: r#"
SELECT
    o_orderpriority,
    COUNT(*) AS order_count
FROM
    {ORDERS_TABLE}
WHERE
    o_orderdate >= DATE '1993-07-01'
  AND o_orderdate < DATEADD(month, 3, '1993-07-01')
  AND EXISTS (
    SELECT
        *
    FROM
        {LINEITEM_TABLE}
    WHERE
        l_orderkey = o_orderkey
      AND l_commitdate < l_receiptdate
)
GROUP BY
    o_orderpriority
ORDER BY
    o_orderpriority;
"#,
    },
    QueryDefinition {
        name: "tpch-q5",
        sql: r#"
SELECT
    n_name,
    SUM(l_extendedprice * (1 - l_discount)) AS revenue
FROM
    {CUSTOMER_TABLE},
    {ORDERS_TABLE},
    {LINEITEM_TABLE},
    {SUPPLIER_TABLE},
    {NATION_TABLE},
    {REGION_TABLE}
WHERE
    c_custkey = o_custkey
  AND l_orderkey = o_orderkey
  AND l_suppkey = s_suppkey
  AND c_nationkey = s_nationkey
  AND s_nationkey = n_nationkey
  AND n_regionkey = r_regionkey
  AND r_name = 'ASIA'
  AND o_orderdate >= DATE '1994-01-01'
  AND o_orderdate < DATEADD(year, 1, '1994-01-01')
GROUP BY
    n_name
ORDER BY
    revenue DESC;
"#,
    },
    QueryDefinition {
        name: "tpch-q6",
        sql: r#"
SELECT
    SUM(l_extendedprice * l_discount) AS revenue
FROM
    {LINEITEM_TABLE}
WHERE
    l_shipdate >= DATE '1994-01-01'
  AND l_shipdate < DATEADD(year, 1, '1994-01-01')
  AND l_discount BETWEEN 0.06 - 0.01 AND 0.06 + 0.01
  AND l_quantity < 24;
"#,
    },
    QueryDefinition {
        name: "tpch-q7",
        sql: r#"
SELECT
    supp_nation,
    cust_nation,
    l_year,
    SUM(volume) AS revenue
FROM
    (
        SELECT
            n1.n_name AS supp_nation,
            n2.n_name AS cust_nation,
            EXTRACT(year FROM l_shipdate) AS l_year,
            l_extendedprice * (1 - l_discount) AS volume
        FROM
            {SUPPLIER_TABLE},
            {LINEITEM_TABLE},
            {ORDERS_TABLE},
            {CUSTOMER_TABLE},
            {NATION_TABLE} n1,
            {NATION_TABLE} n2
        WHERE
            s_suppkey = l_suppkey
          AND o_orderkey = l_orderkey
          AND c_custkey = o_custkey
          AND s_nationkey = n1.n_nationkey
          AND c_nationkey = n2.n_nationkey
          AND (
            (n1.n_name = 'FRANCE' AND n2.n_name = 'GERMANY')
                OR (n1.n_name = 'GERMANY' AND n2.n_name = 'FRANCE')
            )
          AND l_shipdate BETWEEN DATE '1995-01-01' AND DATE '1996-12-31'
    ) AS shipping
GROUP BY
    supp_nation,
    cust_nation,
    l_year
ORDER BY
    supp_nation,
    cust_nation,
    l_year;
"#,
    },
    QueryDefinition {
        name: "tpch-q8",
        sql: r#"
SELECT
    o_year,
    SUM(CASE
            WHEN nation = 'BRAZIL' THEN volume
            ELSE 0
        END) / SUM(volume) AS mkt_share
FROM
    (
        SELECT
            EXTRACT(year FROM o_orderdate) AS o_year,
            l_extendedprice * (1 - l_discount) AS volume,
            n2.n_name AS nation
        FROM
            {PART_TABLE},
            {SUPPLIER_TABLE},
            {LINEITEM_TABLE},
            {ORDERS_TABLE},
            {CUSTOMER_TABLE},
            {NATION_TABLE} n1,
            {NATION_TABLE} n2,
            {REGION_TABLE}
        WHERE
            p_partkey = l_partkey
          AND s_suppkey = l_suppkey
          AND l_orderkey = o_orderkey
          AND o_custkey = c_custkey
          AND c_nationkey = n1.n_nationkey
          AND n1.n_regionkey = r_regionkey
          AND r_name = 'AMERICA'
          AND s_nationkey = n2.n_nationkey
          AND o_orderdate BETWEEN DATE '1995-01-01' AND DATE '1996-12-31'
          AND p_type = 'ECONOMY ANODIZED STEEL'
    ) AS all_nations
GROUP BY
    o_year
ORDER BY
    o_year;
"#,
    },
    QueryDefinition {
        name: "tpch-q9",
        sql: r#"
SELECT
    nation,
    o_year,
    SUM(amount) AS sum_profit
FROM
    (
        SELECT
            n_name AS nation,
            EXTRACT(year FROM o_orderdate) AS o_year,
            l_extendedprice * (1 - l_discount) - ps_supplycost * l_quantity AS amount
        FROM
            {PART_TABLE},
            {SUPPLIER_TABLE},
            {LINEITEM_TABLE},
            {PARTSUPP_TABLE},
            {ORDERS_TABLE},
            {NATION_TABLE}
        WHERE
            s_suppkey = l_suppkey
          AND ps_suppkey = l_suppkey
          AND ps_partkey = l_partkey
          AND p_partkey = l_partkey
          AND o_orderkey = l_orderkey
          AND s_nationkey = n_nationkey
          AND p_name LIKE '%green%'
    ) AS profit
GROUP BY
    nation,
    o_year
ORDER BY
    nation,
    o_year DESC;
"#,
    },
    QueryDefinition {
        name: "tpch-q10",
        sql: r#"
SELECT
    ps_partkey,
    SUM(ps_supplycost * ps_availqty) AS value
FROM
    {PARTSUPP_TABLE},
    {SUPPLIER_TABLE},
    {NATION_TABLE}
WHERE
    ps_suppkey = s_suppkey
  AND s_nationkey = n_nationkey
  AND n_name = 'GERMANY'
GROUP BY
    ps_partkey
HAVING
    SUM(ps_supplycost * ps_availqty) > (
    SELECT
    SUM(ps_supplycost * ps_availqty) * 0.0001
    FROM
    {PARTSUPP_TABLE},
    {SUPPLIER_TABLE},
    {NATION_TABLE}
    WHERE
    ps_suppkey = s_suppkey
   AND s_nationkey = n_nationkey
   AND n_name = 'GERMANY'
    )
ORDER BY value DESC;
"#,
    },
    QueryDefinition {
        name: "tpch-q11",
        sql: r#"
SELECT
    l_shipmode,
    SUM(CASE
            WHEN o_orderpriority = '1-URGENT'
                OR o_orderpriority = '2-HIGH'
                THEN 1
            ELSE 0
        END) AS high_line_count,
    SUM(CASE
            WHEN o_orderpriority <> '1-URGENT'
                AND o_orderpriority <> '2-HIGH'
                THEN 1
            ELSE 0
        END) AS low_line_count
FROM
    {ORDERS_TABLE},
    {LINEITEM_TABLE}
WHERE
    o_orderkey = l_orderkey
  AND l_shipmode IN ('MAIL', 'SHIP')
  AND l_commitdate < l_receiptdate
  AND l_shipdate < l_commitdate
  AND l_receiptdate >= DATE '1994-01-01'
  AND o_orderdate < DATEADD(year, 1, '1994-01-01')
GROUP BY
    l_shipmode
ORDER BY
    l_shipmode;
"#,
    },
    QueryDefinition {
        name: "tpch-q12",
        sql: r#"
SELECT
    c_count,
    COUNT(*) AS custdist
FROM
    (
        SELECT
            c_custkey,
            COUNT(o_orderkey)
        FROM
            {CUSTOMER_TABLE} LEFT OUTER JOIN {ORDERS_TABLE}
                                     ON c_custkey = o_custkey
                                         AND o_comment NOT LIKE '%special%requests%'
        GROUP BY
            c_custkey
    ) AS c_orders (c_custkey, c_count)
GROUP BY
    c_count
ORDER BY
    custdist DESC,
    c_count DESC;
"#,
    },
    QueryDefinition {
        name: "tpch-q13",
        sql: r#"
SELECT
    100.00 * SUM(CASE
                     WHEN p_type LIKE 'PROMO%'
                         THEN l_extendedprice * (1 - l_discount)
                     ELSE 0
        END) / SUM(l_extendedprice * (1 - l_discount)) AS promo_revenue
FROM
    {LINEITEM_TABLE},
    {PART_TABLE}
WHERE
    l_partkey = p_partkey
  AND l_shipdate >= DATE '1995-09-01'
  AND l_shipdate < DATEADD(month, 1, '1995-09-01');
"#,
    },
    QueryDefinition {
        name: "tpch-q14",
        sql: r#"
WITH revenue AS (
    SELECT
        l_suppkey AS supplier_no,
        SUM(l_extendedprice * (1 - l_discount)) AS total_revenue
    FROM
        {LINEITEM_TABLE}
    WHERE
        l_shipdate >= TO_DATE('1996-01-01')
      AND l_shipdate < TO_DATE('1996-04-01')
    GROUP BY
        l_suppkey
)
SELECT
    s_suppkey,
    s_name,
    s_address,
    s_phone,
    total_revenue
FROM
    {SUPPLIER_TABLE},
    revenue
WHERE
    s_suppkey = supplier_no
  AND total_revenue = (
    SELECT MAX(total_revenue)
    FROM revenue
)
ORDER BY
    s_suppkey;
"#,
    },
    QueryDefinition {
        name: "tpch-q15",
        sql: r#"
SELECT
    p_brand,
    p_type,
    p_size,
    COUNT(DISTINCT ps_suppkey) AS supplier_cnt
FROM
    {PARTSUPP_TABLE},
    {PART_TABLE}
WHERE
    p_partkey = ps_partkey
  AND p_brand <> 'Brand#45'
  AND p_type NOT LIKE 'MEDIUM POLISHED%'
  AND p_size IN (49, 14, 23, 45, 19, 3, 36, 9)
  AND ps_suppkey NOT IN (
    SELECT
        s_suppkey
    FROM
        {SUPPLIER_TABLE}
    WHERE
        s_comment LIKE '%Customer%Complaints%'
)
GROUP BY
    p_brand,
    p_type,
    p_size
ORDER BY
    supplier_cnt DESC,
    p_brand,
    p_type,
    p_size;
"#,
    },
    QueryDefinition {
        name: "tpch-q16",
        sql: r#"
SELECT
    SUM(l_extendedprice) / 7.0 AS avg_yearly
FROM
    {LINEITEM_TABLE},
    {PART_TABLE}
WHERE
    p_partkey = l_partkey
  AND p_brand = 'Brand#23'
  AND p_container = 'MED BOX'
  AND l_quantity < (
    SELECT
        0.2 * AVG(l_quantity)
    FROM
        {LINEITEM_TABLE}
    WHERE
        l_partkey = p_partkey
);
"#,
    },
    QueryDefinition {
        name: "tpch-q17",
        sql: r#"
SELECT
    c_name,
    c_custkey,
    o_orderkey,
    o_orderdate,
    o_totalprice,
    SUM(l_quantity)
FROM
    {CUSTOMER_TABLE},
    {ORDERS_TABLE},
    {LINEITEM_TABLE}
WHERE
    o_orderkey IN (
        SELECT
            l_orderkey
        FROM
            {LINEITEM_TABLE}
        GROUP BY
            l_orderkey
        HAVING
            SUM(l_quantity) > 300
    )
  AND c_custkey = o_custkey
  AND o_orderkey = l_orderkey
GROUP BY
    c_name,
    c_custkey,
    o_orderkey,
    o_orderdate,
    o_totalprice
ORDER BY
    o_totalprice DESC,
    o_orderdate
    LIMIT 100;
"#,
    },
    QueryDefinition {
        name: "tpch-q18",
        sql: r#"
SELECT
    SUM(l_extendedprice * (1 - l_discount)) AS revenue
FROM
    {LINEITEM_TABLE},
    {PART_TABLE}
WHERE
    (
        p_partkey = l_partkey
            AND p_brand = 'Brand#12'
            AND p_container IN ('SM CASE', 'SM BOX', 'SM PACK', 'SM PKG')
            AND l_quantity >= 1 AND l_quantity <= 1 + 10
            AND p_size BETWEEN 1 AND 5
            AND l_shipmode IN ('AIR', 'AIR REG')
            AND l_shipinstruct = 'DELIVER IN PERSON'
        )
   OR
    (
        p_partkey = l_partkey
            AND p_brand = 'Brand#23'
            AND p_container IN ('MED BAG', 'MED BOX', 'MED PKG', 'MED PACK')
            AND l_quantity >= 10 AND l_quantity <= 10 + 10
            AND p_size BETWEEN 1 AND 10
            AND l_shipmode IN ('AIR', 'AIR REG')
            AND l_shipinstruct = 'DELIVER IN PERSON'
        )
   OR
    (
        p_partkey = l_partkey
            AND p_brand = 'Brand#34'
            AND p_container IN ('LG CASE', 'LG BOX', 'LG PACK', 'LG PKG')
            AND l_quantity >= 20 AND l_quantity <= 20 + 10
            AND p_size BETWEEN 1 AND 15
            AND l_shipmode IN ('AIR', 'AIR REG')
            AND l_shipinstruct = 'DELIVER IN PERSON'
        );
"#,
    },
    QueryDefinition {
        name: "tpch-q19",
        sql: r#"
SELECT
    s_name,
    s_address
FROM
    {SUPPLIER_TABLE},
    {NATION_TABLE}
WHERE
    s_suppkey IN (
        SELECT
            ps_suppkey
        FROM
            {PARTSUPP_TABLE}
        WHERE
            ps_partkey IN (
                SELECT
                    p_partkey
                FROM
                    {PART_TABLE}
                WHERE
                    p_name LIKE 'forest%'
            )
          AND ps_availqty > (
            SELECT
                0.5 * SUM(l_quantity)
            FROM
                {LINEITEM_TABLE}
            WHERE
                l_partkey = ps_partkey
              AND l_suppkey = ps_suppkey
              AND l_shipdate >= DATE '1994-01-01'
              AND l_shipdate < DATEADD(year, 1, '1994-01-01')
        )
    )
  AND s_nationkey = n_nationkey
  AND n_name = 'CANADA'
ORDER BY
    s_name;
"#,
    },
    QueryDefinition {
        name: "tpch-q20",
        sql: r#"
SELECT
    s_name,
    COUNT(*) AS numwait
FROM
    {SUPPLIER_TABLE},
    {LINEITEM_TABLE} l1,
    {ORDERS_TABLE},
    {NATION_TABLE}
WHERE
    s_suppkey = l1.l_suppkey
  AND o_orderkey = l1.l_orderkey
  AND o_orderstatus = 'F'
  AND l1.l_receiptdate > l1.l_commitdate
  AND EXISTS (
    SELECT
        *
    FROM
        {LINEITEM_TABLE} l2
    WHERE
        l2.l_orderkey = l1.l_orderkey
      AND l2.l_suppkey <> l1.l_suppkey
)
  AND NOT EXISTS (
    SELECT
        *
    FROM
        {LINEITEM_TABLE} l3
    WHERE
        l3.l_orderkey = l1.l_orderkey
      AND l3.l_suppkey <> l1.l_suppkey
      AND l3.l_receiptdate > l3.l_commitdate
)
  AND s_nationkey = n_nationkey
  AND n_name = 'SAUDI ARABIA'
GROUP BY
    s_name
ORDER BY
    numwait DESC,
    s_name
    LIMIT 100;
"#,
    },
    QueryDefinition {
        name: "tpch-q21",
        sql: r#"
SELECT
    cntrycode,
    COUNT(*) AS numcust,
    SUM(c_acctbal) AS totacctbal
FROM
    (
        SELECT
            SUBSTRING(c_phone, 1, 2) AS cntrycode,
            c_acctbal
        FROM
            {CUSTOMER_TABLE}
        WHERE
            SUBSTRING(c_phone, 1, 2) IN
            ('13', '31', '23', '29', '30', '18', '17')
          AND c_acctbal > (
            SELECT
                AVG(c_acctbal)
            FROM
                {CUSTOMER_TABLE}
            WHERE
                c_acctbal > 0.00
              AND SUBSTRING(c_phone, 1, 2) IN
                  ('13', '31', '23', '29', '30', '18', '17')
        )
          AND NOT EXISTS (
            SELECT
                *
            FROM
                {ORDERS_TABLE}
            WHERE
                o_custkey = c_custkey
        )
    ) AS custsale
GROUP BY
    cntrycode
ORDER BY
    cntrycode;
"#,
    },
    QueryDefinition {
        name: "tpch-q22",
        sql: r#"
SELECT
    c_custkey,
    c_name,
    SUM(l_extendedprice * (1 - l_discount)) AS revenue,
    c_acctbal,
    n_name,
    c_address,
    c_phone,
    c_comment
FROM
    {CUSTOMER_TABLE},
    {ORDERS_TABLE},
    {LINEITEM_TABLE},
    {NATION_TABLE}
WHERE
    c_custkey = o_custkey
  AND l_orderkey = o_orderkey
  AND o_orderdate >= DATE '1993-10-01'
  AND o_orderdate < DATEADD(month, 3, '1993-10-01')
  AND l_returnflag = 'R'
  AND c_nationkey = n_nationkey
GROUP BY
    c_custkey,
    c_name,
    c_acctbal,
    c_phone,
    n_name,
    c_address,
    c_comment
ORDER BY
    revenue DESC
    LIMIT 20;
"#,
    },
];

pub const DDL: &[DdlDefinition] = &[
    DdlDefinition {
        table: "customer",
        sql: r#"
CREATE OR REPLACE TABLE {CUSTOMER_TABLE} (
  c_custkey BIGINT,
  c_name VARCHAR(25),
  c_address VARCHAR(40),
  c_nationkey INT,
  c_phone VARCHAR(15),
  c_acctbal DOUBLE,
  c_mktsegment VARCHAR(10),
  c_comment VARCHAR(117)
);
"#,
    },
    DdlDefinition {
        table: "lineitem",
        sql: r#"
CREATE OR REPLACE TABLE {LINEITEM_TABLE} (
  l_orderkey BIGINT,
  l_partkey BIGINT,
  l_suppkey BIGINT,
  l_linenumber INT,
  l_quantity DOUBLE,
  l_extendedprice DOUBLE,
  l_discount DOUBLE,
  l_tax DOUBLE,
  l_returnflag VARCHAR(1),
  l_linestatus VARCHAR(1),
  l_shipdate DATE,
  l_commitdate DATE,
  l_receiptdate DATE,
  l_shipinstruct VARCHAR(25),
  l_shipmode VARCHAR(10),
  l_comment VARCHAR(44)
);
"#,
    },
    DdlDefinition {
        table: "nation",
        sql: r#"
CREATE OR REPLACE TABLE {NATION_TABLE} (
  n_nationkey INT,
  n_name VARCHAR(25),
  n_regionkey INT,
  n_comment VARCHAR(152)
);
"#,
    },
    DdlDefinition {
        table: "orders",
        sql: r#"
CREATE OR REPLACE TABLE {ORDERS_TABLE} (
  o_orderkey BIGINT,
  o_custkey BIGINT,
  o_orderstatus VARCHAR(1),
  o_totalprice DOUBLE,
  o_orderdate DATE,
  o_orderpriority VARCHAR(15),
  o_clerk VARCHAR(15),
  o_shippriority INT,
  o_comment VARCHAR(79)
);
"#,
    },
    DdlDefinition {
        table: "part",
        sql: r#"
CREATE OR REPLACE TABLE {PART_TABLE} (
  p_partkey BIGINT,
  p_name VARCHAR(55),
  p_mfgr VARCHAR(25),
  p_brand VARCHAR(10),
  p_type VARCHAR(25),
  p_size INT,
  p_container VARCHAR(10),
  p_retailprice DOUBLE,
  p_comment VARCHAR(23)
);
"#,
    },
    DdlDefinition {
        table: "partsupp",
        sql: r#"
CREATE OR REPLACE TABLE {PARTSUPP_TABLE} (
  ps_partkey BIGINT,
  ps_suppkey BIGINT,
  ps_availqty INT,
  ps_supplycost DOUBLE,
  ps_comment VARCHAR(199)
);
"#,
    },
    DdlDefinition {
        table: "region",
        sql: r#"
CREATE OR REPLACE TABLE {REGION_TABLE} (
  r_regionkey INT,
  r_name VARCHAR(25),
  r_comment VARCHAR(152)
);
"#,
    },
    DdlDefinition {
        table: "supplier",
        sql: r#"
CREATE OR REPLACE TABLE {SUPPLIER_TABLE} (
  s_suppkey BIGINT,
  s_name VARCHAR(25),
  s_address VARCHAR(40),
  s_nationkey INT,
  s_phone VARCHAR(15),
  s_acctbal DOUBLE,
  s_comment VARCHAR(101)
);
"#,
    },
];
